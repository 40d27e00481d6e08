//! Compile-time description of matrix geometry and wiring.
//!
//! See [`LedLayout`] and the board's [`MATRIX_LAYOUT`].

/// Compile-time description of panel geometry and wiring.
///
/// `LedLayout` defines how a rectangular `(x, y)` panel of LEDs maps to the linear
/// order of LEDs on a NeoPixel-style (WS2812) chain. Entry `i` of the map is the
/// `(col, row)` of the `i`-th LED on the wire.
///
/// Coordinates use a screen-style convention: `(0, 0)` is the top-left corner,
/// `x` (column) increases to the right, and `y` (row) increases downward.
///
/// ## Constructing layouts
///
/// - [`serpentine_row_major`](Self::serpentine_row_major) for the usual zig-zag wiring
/// - [`from_index_grid`](Self::from_index_grid) to copy a wiring table cell by cell
/// - [`new`](Self::new) to list `(x, y)` for each LED in wiring order
///
/// Transforms ([`rotate_cw`](Self::rotate_cw), [`rotate_180`](Self::rotate_180))
/// adapt a layout to how the panel is mounted.
///
/// ## Validation
///
/// Layouts are validated at **compile time** when built in a `const`:
/// - coordinates must be in-bounds
/// - every `(x, y)` cell must appear exactly once
///
/// So every layout is a bijection between cells and LED indices.
///
/// # Example
///
/// ```rust
/// use digit_matrix::led2d::layout::LedLayout;
///
/// const ROTATED: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major().rotate_180();
/// const EXPECTED: LedLayout<6, 3, 2> =
///     LedLayout::new([(2, 1), (1, 1), (0, 1), (0, 0), (1, 0), (2, 0)]);
/// const _: () = assert!(ROTATED.equals(&EXPECTED)); // Compile-time assert
/// ```
///
/// ```text
/// Serpentine 3×2 rotated 180°:
///
///   Before:              After:
///     LED0  LED1  LED2     LED3  LED4  LED5
///     LED5  LED4  LED3     LED2  LED1  LED0
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedLayout<const N: usize, const W: usize, const H: usize> {
    map: [(u16, u16); N],
}

impl<const N: usize, const W: usize, const H: usize> LedLayout<N, W, H> {
    /// Return the array mapping LED wiring order to `(x, y)` coordinates.
    #[must_use]
    pub const fn index_to_xy(&self) -> &[(u16, u16); N] {
        &self.map
    }

    /// Inverse map: entry `row * W + col` is the wiring index of that cell.
    #[must_use]
    pub const fn xy_to_index(&self) -> [u16; N] {
        assert!(
            N <= u16::MAX as usize,
            "total LEDs must fit in u16 for xy_to_index"
        );

        let mut mapping = [None; N];

        let mut led_index = 0;
        while led_index < N {
            let (col, row) = self.map[led_index];
            let col = col as usize;
            let row = row as usize;
            assert!(col < W, "column out of bounds in xy_to_index");
            assert!(row < H, "row out of bounds in xy_to_index");
            let target_index = row * W + col;

            let slot = &mut mapping[target_index];
            assert!(
                slot.is_none(),
                "duplicate (col,row) in xy_to_index inversion"
            );
            *slot = Some(led_index as u16);

            led_index += 1;
        }

        let mut finalized = [0u16; N];
        let mut i = 0;
        while i < N {
            finalized[i] = match mapping[i] {
                Some(led_index) => led_index,
                None => panic!("xy_to_index requires every (col,row) to be covered"),
            };
            i += 1;
        }

        finalized
    }

    /// Const equality helper for compile-time checks.
    #[must_use]
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < N {
            if self.map[i].0 != other.map[i].0 || self.map[i].1 != other.map[i].1 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Constructor: verifies mapping covers every cell exactly once across the W×H panel.
    ///
    /// ```rust
    /// use digit_matrix::led2d::layout::LedLayout;
    ///
    /// // 3×2 panel, wired left-to-right then right-to-left.
    /// const MAP: LedLayout<6, 3, 2> =
    ///     LedLayout::new([(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]);
    /// const _: () = assert!(MAP.equals(&LedLayout::serpentine_row_major()));
    /// ```
    #[must_use]
    pub const fn new(map: [(u16, u16); N]) -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut seen = [false; N];

        let mut i = 0;
        while i < N {
            let (c, r) = map[i];
            let c = c as usize;
            let r = r as usize;

            assert!(c < W, "column out of bounds");
            assert!(r < H, "row out of bounds");

            let cell = r * W + c;
            assert!(!seen[cell], "duplicate (col,row) in mapping");
            seen[cell] = true;

            i += 1;
        }

        let mut k = 0;
        while k < N {
            assert!(seen[k], "mapping does not cover every cell");
            k += 1;
        }

        Self { map }
    }

    /// Constructor from a wiring table: `grid[row][col]` is the LED index of that cell.
    ///
    /// This is how boards usually document their wiring.
    ///
    /// ```rust
    /// use digit_matrix::led2d::layout::LedLayout;
    ///
    /// const MAP: LedLayout<6, 3, 2> = LedLayout::from_index_grid([[5, 4, 3], [0, 1, 2]]);
    /// assert_eq!(MAP.index_to_xy(), &[(0, 1), (1, 1), (2, 1), (2, 0), (1, 0), (0, 0)]);
    /// ```
    #[must_use]
    pub const fn from_index_grid(grid: [[u16; W]; H]) -> Self {
        assert!(W * H == N, "W*H must equal N");

        let mut map = [(0_u16, 0_u16); N];
        let mut seen = [false; N];

        let mut row = 0;
        while row < H {
            let mut col = 0;
            while col < W {
                let led_index = grid[row][col] as usize;
                assert!(led_index < N, "LED index out of bounds in grid");
                assert!(!seen[led_index], "duplicate LED index in grid");
                seen[led_index] = true;
                map[led_index] = (col as u16, row as u16);
                col += 1;
            }
            row += 1;
        }
        Self::new(map)
    }

    /// Serpentine row-major mapping: even rows run left-to-right, odd rows right-to-left.
    ///
    /// ```text
    /// 5×2:
    ///   LED0  LED1  LED2  LED3  LED4
    ///   LED9  LED8  LED7  LED6  LED5
    /// ```
    #[must_use]
    pub const fn serpentine_row_major() -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut mapping = [(0_u16, 0_u16); N];
        let mut y_index = 0;
        while y_index < H {
            let mut x_index = 0;
            while x_index < W {
                let led_index = if y_index % 2 == 0 {
                    y_index * W + x_index
                } else {
                    y_index * W + (W - 1 - x_index)
                };
                mapping[led_index] = (x_index as u16, y_index as u16);
                x_index += 1;
            }
            y_index += 1;
        }
        Self::new(mapping)
    }

    /// Rotate 90° clockwise, turning a W×H layout into H×W.
    ///
    /// ```text
    /// 3×2 serpentine:        rotated to 2×3:
    ///   LED0  LED1  LED2       LED5  LED0
    ///   LED5  LED4  LED3       LED4  LED1
    ///                          LED3  LED2
    /// ```
    #[must_use]
    pub const fn rotate_cw(self) -> LedLayout<N, H, W> {
        let mut out = [(0u16, 0u16); N];
        let mut i = 0;
        while i < N {
            let (c, r) = self.map[i];
            let c = c as usize;
            let r = r as usize;
            out[i] = ((H - 1 - r) as u16, c as u16);
            i += 1;
        }
        LedLayout::<N, H, W>::new(out)
    }

    /// Rotate 180°: LED 0 moves to the opposite corner.
    #[must_use]
    pub const fn rotate_180(self) -> Self {
        self.rotate_cw().rotate_cw()
    }
}

/// Wiring of the 5×5 matrix on the board.
///
/// LED 0 is at the bottom-right; the chain zig-zags upward, ending top-left:
///
/// ```text
///   24  23  22  21  20
///   15  16  17  18  19
///   14  13  12  11  10
///    5   6   7   8   9
///    4   3   2   1   0
/// ```
///
/// This is a row-major serpentine turned 180°.
pub const MATRIX_LAYOUT: LedLayout<25, 5, 5> = LedLayout::from_index_grid([
    [24, 23, 22, 21, 20],
    [15, 16, 17, 18, 19],
    [14, 13, 12, 11, 10],
    [5, 6, 7, 8, 9],
    [4, 3, 2, 1, 0],
]);

const _: () = assert!(MATRIX_LAYOUT.equals(&LedLayout::serpentine_row_major().rotate_180()));
