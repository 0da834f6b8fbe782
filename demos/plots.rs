use gnuplot::{AxesCommon, Color, Figure};

use easings::{Curve, EaseKind};

fn main() {
    let mut plots = Plots { plots: Vec::new() };

    for kind in EaseKind::ALL {
        plots.add(kind.to_string(), kind);
    }

    plots.show_gnuplot();
}

fn sample(n: usize, curve: impl Curve<f32>) -> (Vec<f32>, Vec<f32>) {
    let mut ts = Vec::new();
    let mut vs = Vec::new();

    for (t, v) in easings::Ease(curve).samples(n) {
        ts.push(t);
        vs.push(v);
    }

    (ts, vs)
}

struct Plot {
    name: String,
    ts: Vec<f32>,
    vs: Vec<f32>,
}

struct Plots {
    plots: Vec<Plot>,
}

impl Plots {
    fn add(&mut self, name: String, curve: impl Curve<f32>) {
        let (ts, vs) = sample(100, curve);

        self.plots.push(Plot { name, ts, vs });
    }

    fn show_gnuplot(&self) {
        let mut figure = Figure::new();

        // Show plots in a square rows/columns layout
        let square_size = (self.plots.len() as f32).sqrt().ceil() as u32;

        for (i, plot) in self.plots.iter().enumerate() {
            figure
                .axes2d()
                .lines(&plot.ts, &plot.vs, &[Color("blue")])
                .set_title(&plot.name, &[])
                .set_x_label("progress", &[])
                .set_y_label("eased", &[])
                .set_pos_grid(square_size, square_size, i as u32);
        }

        figure.show().unwrap();
    }
}
