use crate::{
    basis::CubeColor,
    cube::CubeState,
    cubie::{self, PieceKind},
};

/// いくつかの除数を試して最も良い結果が得られた既定値.
pub(crate) const DEFAULT_DIVISOR: f64 = 5.0;

/// 全キュービーを正しい位置と向きへ揃えるのに要する手数の見積もり.
///
/// キュービーごとの手数の合計を `divisor` で割った値を返す. 完成状態では 0 で,
/// それ以外でも負にはならないが, 真の残り手数を上回ることはあり得る.
pub(crate) fn estimate(state: &CubeState, divisor: f64) -> f64 {
    let total = (0..cubie::TRACKED_PIECES as u8)
        .map(|piece| u32::from(piece_cost(state, piece)))
        .sum::<u32>();
    f64::from(total) / divisor
}

/// キュービー 1 個を揃えるのに要する手数.
fn piece_cost(state: &CubeState, piece: u8) -> u8 {
    let positioned = correct_position(state, piece);
    let oriented = correct_orientation(state, piece);
    match cubie::kind_of(piece) {
        PieceKind::Corner => match (oriented, positioned) {
            (true, true) => 0,
            (true, false) => 1,
            (false, _) => 2,
        },
        PieceKind::Edge => match (positioned, oriented) {
            (true, true) => 0,
            (true, false) => 3,
            (false, true) => 1,
            (false, false) => 2,
        },
        PieceKind::Center => unreachable!("center pieces never move"),
    }
}

/// キュービーの定位置を走査順に巡り, 今そこを占めている色を列挙する.
fn occupying_colors<'a>(
    state: &'a CubeState,
    piece: u8,
) -> impl Iterator<Item = CubeColor> + 'a {
    cubie::PIECE_AT
        .iter()
        .enumerate()
        .filter(move |&(_, &p)| p == piece)
        .map(move |(i, _)| state.facelets()[i])
}

/// 定位置の色がすべて自分の色集合に含まれていれば正しい位置にある.
/// 向きが違っていてもよい.
fn correct_position(state: &CubeState, piece: u8) -> bool {
    let colors = cubie::piece_colors(piece);
    occupying_colors(state, piece).all(|color| colors.contains(&color))
}

/// 基準スロットを進めながら走査順に照合し, 最初に一致した時点で正しい向きと
/// みなす. 完全な回転の比較ではない近似.
fn correct_orientation(state: &CubeState, piece: u8) -> bool {
    let colors = cubie::piece_colors(piece);
    let mut slot = 0;
    for color in occupying_colors(state, piece) {
        if color == colors[slot] {
            return true;
        }
        slot += 1;
    }
    false
}
