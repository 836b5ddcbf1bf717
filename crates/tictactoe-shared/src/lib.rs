#![cfg_attr(not(test), no_std)]

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Every winning triple, in the order they are checked:
/// rows top-to-bottom, columns left-to-right, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Finds the first line whose three cells hold the same non-empty value.
///
/// # Arguments
/// * `cells` - The board as a flat row-major slice; `0` means empty
///
/// Cells past the end of the slice count as empty.
pub fn winning_line(cells: &[u8]) -> Option<[usize; 3]> {
    let get_cell = |idx: usize| -> u8 { cells.get(idx).copied().unwrap_or(0) };

    for line in LINES {
        let [a, b, c] = line;
        let v = get_cell(a);
        if v != 0 && v == get_cell(b) && v == get_cell(c) {
            return Some(line);
        }
    }
    None
}

/// Returns true when every cell is occupied.
pub fn is_filled(cells: &[u8]) -> bool {
    cells.len() >= CELLS && cells[..CELLS].iter().all(|&v| v != 0)
}

/// Converts a flat index into a 1-based `(col, row)` pair.
pub fn index_to_col_row(index: usize) -> (usize, usize) {
    (index % SIZE + 1, index / SIZE + 1)
}
