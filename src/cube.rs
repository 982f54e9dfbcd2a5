use anyhow::{ensure, Result};
use rand::prelude::*;

use crate::basis::{CubeColor, Rotation};

mod geometry;

pub(crate) const FACELET_COUNT: usize = 54;

/// `CubeState` は 54 枚のステッカーの色を面ごとの行優先で格納したキューブの配置を表す.
///
/// 面 0 と 2, 1 と 3, 4 と 5 が互いに反対の面になる. 完成状態では面 `f` の
/// 9 枚すべてが色番号 `f` の色になる.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CubeState([CubeColor; FACELET_COUNT]);

impl std::fmt::Debug for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i != 0 && i % 9 == 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", color.letter())?;
        }
        Ok(())
    }
}

impl CubeState {
    /// 完成状態を作る.
    pub(crate) fn solved() -> Self {
        let mut facelets = [CubeColor::White; FACELET_COUNT];
        for (i, cell) in facelets.iter_mut().enumerate() {
            *cell = CubeColor::ALL[i / 9];
        }
        Self(facelets)
    }

    /// 54 要素の色列から配置を作る. 長さの異なる入力は不正な状態として拒否する.
    pub(crate) fn from_colors(colors: &[CubeColor]) -> Result<Self> {
        ensure!(
            colors.len() == FACELET_COUNT,
            "expected {} facelets, but found {}",
            FACELET_COUNT,
            colors.len()
        );
        let mut facelets = [CubeColor::White; FACELET_COUNT];
        facelets.copy_from_slice(colors);
        Ok(Self(facelets))
    }

    pub(crate) fn facelets(&self) -> &[CubeColor; FACELET_COUNT] {
        &self.0
    }

    /// 回転を適用した配置を返す. 元の配置は変更しない.
    pub(crate) fn apply(&self, rotation: Rotation) -> Self {
        let table = &geometry::move_tables()[rotation.index()];
        let mut next = [CubeColor::White; FACELET_COUNT];
        for (cell, &src) in next.iter_mut().zip(table.iter()) {
            *cell = self.0[src as usize];
        }
        Self(next)
    }
}

/// 完成状態から `count` 手の一様ランダムな回転を順に適用し, その手順と結果の配置を返す.
pub(crate) fn scramble(rng: &mut impl Rng, count: usize) -> (Vec<Rotation>, CubeState) {
    let mut state = CubeState::solved();
    let mut rotations = Vec::with_capacity(count);
    for _ in 0..count {
        let rotation = Rotation::ALL[rng.gen_range(0..Rotation::ALL.len())];
        state = state.apply(rotation);
        rotations.push(rotation);
    }
    (rotations, state)
}
