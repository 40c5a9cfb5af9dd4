use std::fmt;

/// Writes `items` separated by commas, with no surrounding brackets.
pub(crate) fn write_joined<I>(f: &mut fmt::Formatter, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
