//! Splitting serialized tables into literal-sized segments
//!
//! A serialized automaton can be larger than the biggest string literal a
//! target compiler accepts. Each target reports how many entries fit in one
//! literal; the pipeline splits the table and the generated code concatenates
//! the pieces at runtime.

/// Byte limit for a UTF-8 encoded string literal in a JVM class file
pub const CLASS_FILE_LITERAL_LIMIT: usize = 65535;

/// Bytes needed to encode any value in `0..=0xFFFF` as modified UTF-8
pub const MAX_BMP_ENCODING_WIDTH: usize = 3;

/// Number of entries that fit in one literal when every entry needs
/// `worst_case_width` units of a `literal_limit` budget.
///
/// Never returns zero, so a segment always makes progress.
pub const fn segment_limit(literal_limit: usize, worst_case_width: usize) -> usize {
    let width = if worst_case_width == 0 {
        1
    } else {
        worst_case_width
    };
    let limit = literal_limit / width;
    if limit == 0 { 1 } else { limit }
}

/// Splits `table` into consecutive segments of at most `limit` entries.
///
/// Order is preserved and an empty table yields no segments.
pub fn split_segments<T>(table: &[T], limit: usize) -> Vec<&[T]> {
    table.chunks(limit.max(1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_file_segment_limit() {
        let limit = segment_limit(CLASS_FILE_LITERAL_LIMIT, MAX_BMP_ENCODING_WIDTH);
        assert_eq!(limit, 21845);
        assert!(limit * MAX_BMP_ENCODING_WIDTH <= CLASS_FILE_LITERAL_LIMIT);
    }

    #[test]
    fn test_segment_limit_fits_budget() {
        for (budget, width) in [(10, 3), (65535, 4), (1, 1), (100, 7)] {
            let limit = segment_limit(budget, width);
            assert!(limit > 0);
            assert!(limit * width <= budget);
        }
    }

    #[test]
    fn test_segment_limit_degenerate_inputs() {
        assert_eq!(segment_limit(2, 3), 1);
        assert_eq!(segment_limit(12, 0), 12);
    }

    #[test]
    fn test_split_segments() {
        let table: Vec<u16> = (0..10).collect();
        let segments = split_segments(&table, 4);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], &[0, 1, 2, 3]);
        assert_eq!(segments[2], &[8, 9]);
        assert_eq!(segments.concat(), table);
    }

    #[test]
    fn test_split_segments_edges() {
        let empty: Vec<u16> = Vec::new();
        assert!(split_segments(&empty, 4).is_empty());

        let exact = [1u16, 2, 3, 4];
        assert_eq!(split_segments(&exact, 4).len(), 1);
        assert_eq!(split_segments(&exact, 0).len(), 4);
    }
}
