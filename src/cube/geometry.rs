use once_cell::sync::Lazy;

use super::FACELET_COUNT;
use crate::basis::{Axis, Rotation, Sense};

type Point = [usize; 3];

/// 法線は軸とその向き (0 側か 2 側か) の組で表す.
type Normal = (Axis, usize);

/// `Sticker` はステッカーの空間配置を表す. `point` は属する小キューブの座標,
/// `normal` はステッカーが向いている外側の方向.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sticker {
    point: Point,
    normal: Normal,
}

/// ステッカー添字から空間配置を求める. 面 0, 2 は x = 0, 2 平面, 面 3, 1 は
/// y = 0, 2 平面, 面 5, 4 は z = 0, 2 平面に置かれ, 行と列の向きは
/// `cubie::PIECE_AT` の並びと一致するように取る.
fn sticker_of(index: usize) -> Sticker {
    let row = index % 9 / 3;
    let col = index % 3;
    let (point, normal) = match index / 9 {
        0 => ([0, col, 2 - row], (Axis::X, 0)),
        1 => ([col, 2, 2 - row], (Axis::Y, 2)),
        2 => ([2, 2 - col, 2 - row], (Axis::X, 2)),
        3 => ([2 - col, 0, 2 - row], (Axis::Y, 0)),
        4 => ([col, row, 2], (Axis::Z, 2)),
        5 => ([col, 2 - row, 0], (Axis::Z, 0)),
        _ => unreachable!("facelet index out of range: {}", index),
    };
    Sticker { point, normal }
}

/// 軸に対して巡回順で続く残り 2 軸の添字.
fn cyclic_pair(axis: Axis) -> (usize, usize) {
    match axis {
        Axis::X => (1, 2),
        Axis::Y => (2, 0),
        Axis::Z => (0, 1),
    }
}

fn rotate_point(axis: Axis, sense: Sense, mut point: Point) -> Point {
    let (u, v) = cyclic_pair(axis);
    let (pu, pv) = (point[u], point[v]);
    let (nu, nv) = match sense {
        Sense::Cw => (2 - pv, pu),
        Sense::Ccw => (pv, 2 - pu),
        Sense::Half => (2 - pu, 2 - pv),
    };
    point[u] = nu;
    point[v] = nv;
    point
}

/// 法線を方向ベクトルとして回す. 回転軸に沿った法線は変わらない.
fn rotate_normal(axis: Axis, sense: Sense, normal: Normal) -> Normal {
    let (n_axis, pole) = normal;
    if n_axis == axis {
        return normal;
    }
    let mut dir = [0i8; 3];
    dir[n_axis.index()] = if pole == 2 { 1 } else { -1 };
    let (u, v) = cyclic_pair(axis);
    let (du, dv) = (dir[u], dir[v]);
    let (nu, nv) = match sense {
        Sense::Cw => (-dv, du),
        Sense::Ccw => (dv, -du),
        Sense::Half => (-du, -dv),
    };
    dir[u] = nu;
    dir[v] = nv;
    let n_axis = Axis::ALL[dir.iter().position(|&d| d != 0).unwrap()];
    let pole = if dir[n_axis.index()] == 1 { 2 } else { 0 };
    (n_axis, pole)
}

/// 18 通りの回転それぞれの置換表. `table[dest] = src` で, 回転後の配置は
/// 添字 `dest` に回転前の添字 `src` の色を持つ.
static MOVE_TABLES: Lazy<[[u8; FACELET_COUNT]; 18]> = Lazy::new(|| {
    let stickers = (0..FACELET_COUNT).map(sticker_of).collect::<Vec<_>>();
    let index_of = |target: Sticker| {
        stickers
            .iter()
            .position(|&s| s == target)
            .expect("a rotated sticker must stay on the cube") as u8
    };
    let mut tables = [[0u8; FACELET_COUNT]; 18];
    for rotation in Rotation::ALL.iter() {
        let table = &mut tables[rotation.index()];
        for (i, cell) in table.iter_mut().enumerate() {
            *cell = i as u8;
        }
        for (src, &sticker) in stickers.iter().enumerate() {
            if sticker.point[rotation.axis.index()] != rotation.layer.coord() {
                continue;
            }
            let moved = Sticker {
                point: rotate_point(rotation.axis, rotation.sense, sticker.point),
                normal: rotate_normal(rotation.axis, rotation.sense, sticker.normal),
            };
            table[index_of(moved) as usize] = src as u8;
        }
    }
    tables
});

pub(super) fn move_tables() -> &'static [[u8; FACELET_COUNT]; 18] {
    &MOVE_TABLES
}
