use anyhow::{bail, Result};

/// `CubeColor` はステッカーの色を表す. 色番号は完成状態でその色が占める面の番号と一致する.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum CubeColor {
    White,
    Red,
    Yellow,
    Orange,
    Blue,
    Green,
}

impl CubeColor {
    pub(crate) const ALL: [CubeColor; 6] = [
        CubeColor::White,
        CubeColor::Red,
        CubeColor::Yellow,
        CubeColor::Orange,
        CubeColor::Blue,
        CubeColor::Green,
    ];

    /// 0 から 5 の色番号から色を作る. 範囲外は不正な入力として拒否する.
    pub(crate) fn from_index(index: u8) -> Result<Self> {
        if Self::ALL.len() as u8 <= index {
            bail!("expected color index in 0..6, but found {}", index);
        }
        Ok(Self::ALL[index as usize])
    }

    pub(crate) fn letter(self) -> char {
        match self {
            CubeColor::White => 'W',
            CubeColor::Red => 'R',
            CubeColor::Yellow => 'Y',
            CubeColor::Orange => 'O',
            CubeColor::Blue => 'B',
            CubeColor::Green => 'G',
        }
    }
}

/// `Axis` は回転軸を表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub(crate) const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

/// `Layer` は回転させる層を表す. 外側の 2 層だけが回せて, 中間層は回せない.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Layer {
    First,
    Last,
}

impl Layer {
    /// 回転軸方向の小キューブ座標.
    pub(crate) fn coord(self) -> usize {
        match self {
            Layer::First => 0,
            Layer::Last => 2,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// `Sense` は回転の向きと量を表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Sense {
    Ccw,
    Cw,
    Half,
}

impl Sense {
    /// 逆回転の向き. 半回転は自分自身が逆になる.
    pub(crate) fn inverse(self) -> Self {
        match self {
            Sense::Ccw => Sense::Cw,
            Sense::Cw => Sense::Ccw,
            Sense::Half => Sense::Half,
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn degrees(self) -> &'static str {
        match self {
            Sense::Ccw => "-90",
            Sense::Cw => "+90",
            Sense::Half => "180",
        }
    }
}

/// `Rotation` は回転軸, 回転させる層, 回転の向きの組を表す. 全部で 18 通りある.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Rotation {
    pub(crate) axis: Axis,
    pub(crate) layer: Layer,
    pub(crate) sense: Sense,
}

const fn rot(axis: Axis, layer: Layer, sense: Sense) -> Rotation {
    Rotation { axis, layer, sense }
}

impl Rotation {
    pub(crate) const ALL: [Rotation; 18] = [
        rot(Axis::X, Layer::First, Sense::Ccw),
        rot(Axis::X, Layer::First, Sense::Cw),
        rot(Axis::X, Layer::First, Sense::Half),
        rot(Axis::X, Layer::Last, Sense::Ccw),
        rot(Axis::X, Layer::Last, Sense::Cw),
        rot(Axis::X, Layer::Last, Sense::Half),
        rot(Axis::Y, Layer::First, Sense::Ccw),
        rot(Axis::Y, Layer::First, Sense::Cw),
        rot(Axis::Y, Layer::First, Sense::Half),
        rot(Axis::Y, Layer::Last, Sense::Ccw),
        rot(Axis::Y, Layer::Last, Sense::Cw),
        rot(Axis::Y, Layer::Last, Sense::Half),
        rot(Axis::Z, Layer::First, Sense::Ccw),
        rot(Axis::Z, Layer::First, Sense::Cw),
        rot(Axis::Z, Layer::First, Sense::Half),
        rot(Axis::Z, Layer::Last, Sense::Ccw),
        rot(Axis::Z, Layer::Last, Sense::Cw),
        rot(Axis::Z, Layer::Last, Sense::Half),
    ];

    /// `ALL` と置換表での添字.
    pub(crate) fn index(self) -> usize {
        self.axis.index() * 6 + self.layer.index() * 3 + self.sense.index()
    }

    /// 同じ軸と層で向きだけを逆にした回転.
    pub(crate) fn inverse(self) -> Self {
        Self {
            sense: self.sense.inverse(),
            ..self
        }
    }

    /// 軸の文字, 層番号, 向きの符号 (-1, 1, 2) から回転を作る.
    /// 列挙範囲の外は不正な回転として拒否する.
    pub(crate) fn from_raw(axis: char, layer: u8, sense: i8) -> Result<Self> {
        let axis = match axis {
            'x' => Axis::X,
            'y' => Axis::Y,
            'z' => Axis::Z,
            c => bail!("expected axis 'x', 'y' or 'z', but found '{}'", c),
        };
        let layer = match layer {
            0 => Layer::First,
            2 => Layer::Last,
            l => bail!("expected layer 0 or 2, but found {}", l),
        };
        let sense = match sense {
            -1 => Sense::Ccw,
            1 => Sense::Cw,
            2 => Sense::Half,
            s => bail!("expected sense -1, 1 or 2, but found {}", s),
        };
        Ok(Self { axis, layer, sense })
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.axis.letter(),
            self.layer.coord(),
            self.sense.degrees()
        )
    }
}

#[test]
fn rotation_indices_are_distinct() {
    let mut seen = [false; 18];
    for rotation in Rotation::ALL.iter() {
        assert!(!seen[rotation.index()], "duplicate index: {:?}", rotation);
        seen[rotation.index()] = true;
    }
}

#[test]
fn inverse_is_within_the_move_set() {
    for rotation in Rotation::ALL.iter() {
        let inverse = rotation.inverse();
        assert!(Rotation::ALL.contains(&inverse));
        assert_eq!(inverse.inverse(), *rotation);
    }
}

#[test]
fn from_raw_accepts_the_enumerated_domain() {
    let rotation = Rotation::from_raw('x', 0, -1).unwrap();
    assert_eq!(
        rotation,
        Rotation {
            axis: Axis::X,
            layer: Layer::First,
            sense: Sense::Ccw,
        }
    );
    assert!(Rotation::from_raw('w', 0, 1).is_err());
    assert!(Rotation::from_raw('x', 1, 1).is_err());
    assert!(Rotation::from_raw('x', 0, 3).is_err());
}

#[test]
fn color_index_is_validated() {
    assert_eq!(CubeColor::from_index(5).unwrap(), CubeColor::Green);
    assert!(CubeColor::from_index(6).is_err());
}
