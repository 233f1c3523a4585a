use crate::ScanPattern;

impl ScanPattern {
    /// Writes the ticks of one pixel whose box starts at `(x, y)`.
    #[inline(always)]
    pub(crate) fn synthesize(
        self,
        (mut x, mut y): (f64, f64),
        dur_step: f64,
        dst_x: &mut [f64],
        dst_y: &mut [f64],
    ) {
        let half_step = dur_step / 2.;
        let ticks = dst_x.iter_mut().zip(dst_y.iter_mut());
        match self {
            Self::Step => ticks.for_each(|(dx, dy)| {
                *dx = x + half_step;
                *dy = y + half_step;
            }),
            Self::Diagonal => ticks.for_each(|(dx, dy)| {
                *dx = x;
                *dy = y;
                x += dur_step;
                y += dur_step;
            }),
            Self::Ramp => ticks.for_each(|(dx, dy)| {
                *dx = x;
                *dy = y + half_step;
                x += dur_step;
            }),
        }
    }
}
