use ndarray::Array2;

use crate::error::ParseError;

/// Reads a rectangular block of characters into a row-major [`Array2`], mapping each one through `cell`.
///
/// Leading and trailing blank lines are ignored. Every remaining line must have the same width.
pub(crate) fn parse_grid<T, F>(input: &str, cell: F) -> Result<Array2<T>, ParseError>
where
    T: Clone,
    F: Fn(char) -> T,
{
    let mut rows: Vec<Vec<T>> = Vec::new();
    // line numbers count the leading blank lines we skip
    let leading = input.lines().take_while(|line| line.trim().is_empty()).count();

    for (offset, line) in input.trim().lines().enumerate() {
        let line = line.trim_end();
        let row = line.chars().map(&cell).collect::<Vec<_>>();
        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(ParseError::Ragged { line: leading + offset + 1, expected: first.len(), found: row.len() });
            }
        }
        rows.push(row);
    }

    let width = match rows.first() {
        None => return Err(ParseError::Empty),
        Some(row) => row.len(),
    };

    Ok(Array2::from_shape_fn((rows.len(), width), |(y, x)| rows[y][x].clone()))
}

#[cfg(test)]
mod tests {
    use super::parse_grid;
    use crate::error::ParseError;

    #[test]
    fn rows_become_array_rows() {
        let grid = parse_grid("ab\ncd\n", |c| c).unwrap();
        assert_eq!(grid.dim(), (2, 2));
        assert_eq!(grid[(1, 0)], 'c');
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = parse_grid("\nabc\nab\n", |c| c).unwrap_err();
        assert!(matches!(err, ParseError::Ragged { line: 3, expected: 3, found: 2 }));
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(matches!(parse_grid("  \n\n", |c| c), Err(ParseError::Empty)));
    }
}
