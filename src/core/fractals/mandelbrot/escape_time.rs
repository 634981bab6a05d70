/// Squared radius of the bounding circle; any orbit leaving it diverges.
pub const ESCAPE_RADIUS_SQ: f32 = 4.0;

/// Source of the constant `c` each lane adds back on every step.
///
/// Implementations recover `c` from precomputed plane coordinates rather than
/// from the evolving `z`, so lanes never read each other's state.
pub trait GroupSeeds {
    fn seed(&self, lane: usize) -> (f32, f32);
}

/// Seeds for one image row: per-column real parts, one shared imaginary part.
#[derive(Debug, Clone, Copy)]
pub struct RowSeeds<'a> {
    pub re: &'a [f32],
    pub im: f32,
}

impl GroupSeeds for RowSeeds<'_> {
    #[inline(always)]
    fn seed(&self, lane: usize) -> (f32, f32) {
        (self.re[lane], self.im)
    }
}

/// Seeds for a densely packed tile of `re.len()` columns by `im.len()` rows.
#[derive(Debug, Clone, Copy)]
pub struct TileSeeds<'a> {
    pub re: &'a [f32],
    pub im: &'a [f32],
}

impl GroupSeeds for TileSeeds<'_> {
    #[inline(always)]
    fn seed(&self, lane: usize) -> (f32, f32) {
        let width = self.re.len();
        (self.re[lane % width], self.im[lane / width])
    }
}

/// Iterates `z <- z^2 + c` for a group of independent lanes until every lane
/// has escaped or `limit` rounds have run.
///
/// On entry `z_re`/`z_im` must hold each lane's starting point (its `c`).
/// `escapes` is reset to `limit` first; a lane whose `|z|^2` exceeds
/// [`ESCAPE_RADIUS_SQ`] at round `i` gets `i` written exactly once and is
/// left alone afterwards. The group stops as soon as a round finds no lane
/// still active. Returns the number of rounds run.
pub fn settle_group<S: GroupSeeds>(
    z_re: &mut [f32],
    z_im: &mut [f32],
    escapes: &mut [u32],
    seeds: &S,
    limit: u32,
) -> u32 {
    debug_assert_eq!(z_re.len(), escapes.len());
    debug_assert_eq!(z_im.len(), escapes.len());

    escapes.fill(limit);

    for i in 0..limit {
        let mut active = false;

        let lanes = escapes.iter_mut().zip(z_re.iter_mut()).zip(z_im.iter_mut());
        for (lane, ((escape, re), im)) in lanes.enumerate() {
            if *escape != limit {
                continue;
            }

            let re_sq = *re * *re;
            let im_sq = *im * *im;

            if re_sq + im_sq > ESCAPE_RADIUS_SQ {
                *escape = i;
            } else {
                let (c_re, c_im) = seeds.seed(lane);
                *im = 2.0 * *re * *im + c_im;
                *re = re_sq - im_sq + c_re;
                active = true;
            }
        }

        if !active {
            return i + 1;
        }
    }

    limit
}
