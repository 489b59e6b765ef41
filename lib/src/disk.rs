//! Compacting a fragmented disk.
//!
//! The dense map alternates file and free-space lengths, starting with a file.
//! Files are taken from a max-heap ordered by position and free spans from a
//! min-heap ordered by position, so the right-most file always meets the
//! left-most gap first.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::ParseError;

/// A contiguous run of blocks belonging to one file.
///
/// Ordering is by position first, which is unique per extent.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Extent {
    /// First block.
    pub pos: usize,
    /// Number of blocks.
    pub len: usize,
    /// Owning file id.
    pub id: usize,
}

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
struct FreeSpan {
    pos: usize,
    len: usize,
}

/// The disk as laid out before any compaction.
#[derive(Clone, Debug, Default)]
pub struct DiskMap {
    files: Vec<Extent>,
    free: Vec<FreeSpan>,
}

impl DiskMap {
    /// Files in map order.
    pub fn files(&self) -> &[Extent] {
        &self.files
    }

    fn heaps(&self) -> (BinaryHeap<Extent>, BinaryHeap<Reverse<FreeSpan>>) {
        (
            self.files.iter().copied().collect(),
            self.free.iter().copied().map(Reverse).collect(),
        )
    }
}

/// Reads the single line of digits.
pub fn parse(input: &str) -> Result<DiskMap, ParseError> {
    let line = input.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut map = DiskMap::default();
    let mut pos = 0;
    for (index, c) in line.chars().enumerate() {
        let Some(len) = c.to_digit(10).map(|d| d as usize) else {
            return Err(ParseError::Malformed { line: 1, expected: "a decimal digit", found: c.to_string() });
        };
        if index % 2 == 0 {
            map.files.push(Extent { pos, len, id: index / 2 });
        } else if len > 0 {
            map.free.push(FreeSpan { pos, len });
        }
        pos += len;
    }

    debug!(files = map.files.len(), spans = map.free.len(), blocks = pos, "parsed disk map");
    Ok(map)
}

/// Moves single blocks from the end of the disk into the left-most gaps, splitting files as needed.
pub fn compact_blocks(map: &DiskMap) -> Vec<Extent> {
    let (mut files, mut free) = map.heaps();
    let mut placed = Vec::with_capacity(files.len());

    while let Some(file) = files.pop() {
        let span = match free.peek() {
            Some(Reverse(span)) if span.pos < file.pos => *span,
            // no gap left of this file, so none left of any remaining file either
            _ => {
                placed.push(file);
                continue;
            }
        };
        free.pop();

        let moved = file.len.min(span.len);
        placed.push(Extent { pos: span.pos, len: moved, id: file.id });
        if span.len > moved {
            free.push(Reverse(FreeSpan { pos: span.pos + moved, len: span.len - moved }));
        }
        if file.len > moved {
            // the head of the file stays put; its tail was moved
            files.push(Extent { len: file.len - moved, ..file });
        }
    }

    placed
}

/// Moves whole files, right-most first, into the left-most gap that fits. Each file is tried once.
pub fn compact_files(map: &DiskMap) -> Vec<Extent> {
    let (mut files, mut free) = map.heaps();
    let mut placed = Vec::with_capacity(files.len());

    while let Some(file) = files.pop() {
        let mut passed_over = Vec::new();
        let mut destination = None;

        while let Some(Reverse(span)) = free.pop() {
            if span.pos >= file.pos {
                passed_over.push(span);
                break;
            }
            if span.len >= file.len {
                destination = Some(span);
                break;
            }
            passed_over.push(span);
        }

        match destination {
            Some(span) => {
                placed.push(Extent { pos: span.pos, ..file });
                if span.len > file.len {
                    free.push(Reverse(FreeSpan { pos: span.pos + file.len, len: span.len - file.len }));
                }
            }
            None => placed.push(file),
        }
        free.extend(passed_over.into_iter().map(Reverse));
    }

    placed
}

/// Sum of `position * file id` over every occupied block.
pub fn checksum(extents: &[Extent]) -> u64 {
    extents.iter()
        .map(|extent| {
            let (pos, len) = (extent.pos as u64, extent.len as u64);
            // pos + (pos + 1) + ... + (pos + len - 1)
            let positions = len * pos + len * len.saturating_sub(1) / 2;
            positions * extent.id as u64
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{checksum, compact_blocks, compact_files, parse, Extent};
    use crate::error::ParseError;

    const SAMPLE: &str = "2333133121414131402\n";

    #[test]
    fn sample_block_compaction() {
        assert_eq!(checksum(&compact_blocks(&parse(SAMPLE).unwrap())), 1928);
    }

    #[test]
    fn sample_file_compaction() {
        assert_eq!(checksum(&compact_files(&parse(SAMPLE).unwrap())), 2858);
    }

    #[test]
    fn small_map() {
        // 0..111....22222 -> 022111222......
        let map = parse("12345").unwrap();
        assert_eq!(checksum(&compact_blocks(&map)), 60);
        // nothing fits whole, so the layout is unchanged
        assert_eq!(checksum(&compact_files(&map)), 132);
        assert_eq!(checksum(map.files()), 132);
    }

    #[test]
    fn zero_free_space_leaves_files_alone() {
        let map = parse("1020").unwrap();
        let mut blocks = compact_blocks(&map);
        blocks.sort();
        assert_eq!(blocks, vec![Extent { pos: 0, len: 1, id: 0 }, Extent { pos: 1, len: 2, id: 1 }]);
        assert_eq!(checksum(&compact_files(&map)), 3);
    }

    #[test]
    fn files_never_move_right() {
        // 0.....1 : the file moves into the gap, the gap after it is ignored
        let map = parse("151").unwrap();
        let mut files = compact_files(&map);
        files.sort();
        assert_eq!(files, vec![Extent { pos: 0, len: 1, id: 0 }, Extent { pos: 1, len: 1, id: 1 }]);
    }

    #[test]
    fn checksum_of_one_extent() {
        assert_eq!(checksum(&[Extent { pos: 3, len: 4, id: 2 }]), 2 * (3 + 4 + 5 + 6));
        assert_eq!(checksum(&[Extent { pos: 3, len: 0, id: 2 }]), 0);
    }

    #[test]
    fn non_digit_rejected() {
        assert!(matches!(parse("12a4"), Err(ParseError::Malformed { line: 1, .. })));
        assert!(matches!(parse("\n"), Err(ParseError::Empty)));
    }
}
