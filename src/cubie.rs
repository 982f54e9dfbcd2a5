use crate::basis::CubeColor;

pub(crate) const CORNER_COUNT: usize = 8;
pub(crate) const EDGE_COUNT: usize = 12;

/// ヒューリスティックが追跡するキュービーの数. センターは動かないので含めない.
pub(crate) const TRACKED_PIECES: usize = CORNER_COUNT + EDGE_COUNT;

/// どのステッカーがどのキュービーに属するかを面ごとの行優先で並べた表.
/// 0..8 はコーナー (ステッカー 3 枚), 8..20 はエッジ (2 枚),
/// 20..26 はセンター (1 枚) を表す.
#[rustfmt::skip]
pub(crate) const PIECE_AT: [u8; 54] = [
    0,  8,  1,  9, 20, 10,  2, 11,  3,
    1, 12,  4, 10, 21, 13,  3, 14,  5,
    4, 15,  6, 13, 22, 16,  5, 17,  7,
    6, 18,  0, 16, 23,  9,  7, 19,  2,
    0, 18,  6,  8, 24, 15,  1, 12,  4,
    3, 14,  5, 11, 25, 17,  2, 19,  7,
];

/// `PieceKind` はキュービーの種別を表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PieceKind {
    Corner,
    Edge,
    Center,
}

pub(crate) fn kind_of(piece: u8) -> PieceKind {
    match piece as usize {
        p if p < CORNER_COUNT => PieceKind::Corner,
        p if p < TRACKED_PIECES => PieceKind::Edge,
        _ => PieceKind::Center,
    }
}

const CORNER_COLORS: [[CubeColor; 3]; CORNER_COUNT] = [
    [CubeColor::White, CubeColor::Orange, CubeColor::Blue],
    [CubeColor::White, CubeColor::Red, CubeColor::Blue],
    [CubeColor::White, CubeColor::Orange, CubeColor::Green],
    [CubeColor::White, CubeColor::Red, CubeColor::Green],
    [CubeColor::Red, CubeColor::Yellow, CubeColor::Blue],
    [CubeColor::Red, CubeColor::Yellow, CubeColor::Green],
    [CubeColor::Yellow, CubeColor::Orange, CubeColor::Blue],
    [CubeColor::Yellow, CubeColor::Orange, CubeColor::Green],
];

const EDGE_COLORS: [[CubeColor; 2]; EDGE_COUNT] = [
    [CubeColor::White, CubeColor::Blue],
    [CubeColor::White, CubeColor::Orange],
    [CubeColor::White, CubeColor::Red],
    [CubeColor::White, CubeColor::Green],
    [CubeColor::Red, CubeColor::Blue],
    [CubeColor::Red, CubeColor::Yellow],
    [CubeColor::Red, CubeColor::Green],
    [CubeColor::Yellow, CubeColor::Blue],
    [CubeColor::Yellow, CubeColor::Orange],
    [CubeColor::Yellow, CubeColor::Green],
    [CubeColor::Orange, CubeColor::Blue],
    [CubeColor::Orange, CubeColor::Green],
];

/// 完成状態でキュービー `piece` のステッカーが持つ色を `PIECE_AT` の走査順に返す.
/// 先頭の色が向きの照合で最初に使う基準スロットになる.
pub(crate) fn piece_colors(piece: u8) -> &'static [CubeColor] {
    match kind_of(piece) {
        PieceKind::Corner => &CORNER_COLORS[piece as usize],
        PieceKind::Edge => &EDGE_COLORS[piece as usize - CORNER_COUNT],
        PieceKind::Center => panic!("center pieces have no color set: {}", piece),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::CubeState;

    #[test]
    fn occurrence_counts_match_piece_kinds() {
        let mut counts = [0usize; 26];
        for &piece in PIECE_AT.iter() {
            counts[piece as usize] += 1;
        }
        for (piece, &count) in counts.iter().enumerate() {
            let expected = match kind_of(piece as u8) {
                PieceKind::Corner => 3,
                PieceKind::Edge => 2,
                PieceKind::Center => 1,
            };
            assert_eq!(count, expected, "piece {}", piece);
        }
    }

    #[test]
    fn color_sets_agree_with_the_solved_state() {
        let solved = CubeState::solved();
        for piece in 0..TRACKED_PIECES as u8 {
            let actual = PIECE_AT
                .iter()
                .enumerate()
                .filter(|&(_, &p)| p == piece)
                .map(|(i, _)| solved.facelets()[i])
                .collect::<Vec<_>>();
            assert_eq!(actual, piece_colors(piece), "piece {}", piece);
        }
    }
}
