use std::fmt::Write;
use std::io::Cursor;

use bencher::{benchmark_group, benchmark_main, Bencher};
use xyzclr::{convert, write_colors, Color, ColorSink, Config, Frame, XYZReader};

benchmark_main!(reading, converting);
benchmark_group!(reading, read_frame, read_all_frames);
benchmark_group!(converting, convert_frames, render_colors);

const NATOMS: usize = 2000;
const NFRAMES: usize = 20;

/// A synthetic trajectory with categories cycling through 0 to 4.
fn trajectory() -> String {
    let mut s = String::new();
    for frame in 0..NFRAMES {
        writeln!(s, "{NATOMS}\nframe {frame}").unwrap();
        for atom in 0..NATOMS {
            let x = atom as f32 * 0.1;
            writeln!(s, "C {x:.4} {:.4} {:.4} {}", x + 1.0, x + 2.0, atom % 5).unwrap();
        }
    }
    s
}

/// Renders the colors without touching the file system.
struct Discard(Vec<u8>);

impl ColorSink for Discard {
    fn write_frame(&mut self, _frame: usize, colors: &[Option<Color>]) -> xyzclr::Result<()> {
        self.0.clear();
        write_colors(&mut self.0, colors)?;
        Ok(())
    }
}

fn read_frame(b: &mut Bencher) {
    let data = trajectory();
    let mut reader = XYZReader::new(Cursor::new(data));
    let mut frame = Frame::default();
    b.iter(|| {
        if !reader.read_frame(&mut frame).unwrap() {
            reader.home().unwrap()
        }
    });
}

fn read_all_frames(b: &mut Bencher) {
    let data = trajectory();
    let mut reader = XYZReader::new(Cursor::new(data));
    b.iter(|| {
        reader.home().unwrap();
        reader.read_all_frames().unwrap()
    });
}

fn convert_frames(b: &mut Bencher) {
    let data = trajectory();
    let config = Config::default();
    let mut reader = XYZReader::new(Cursor::new(data));
    let mut sink = Discard(Vec::new());
    b.iter(|| {
        reader.home().unwrap();
        convert(&mut reader, &config, &mut sink).unwrap()
    });
}

fn render_colors(b: &mut Bencher) {
    let colors: Vec<_> = (0..NATOMS)
        .map(|atom| Config::default().table.lookup((atom % 5) as f64))
        .collect();
    let mut buf = Vec::new();
    b.iter(|| {
        buf.clear();
        write_colors(&mut buf, &colors).unwrap();
    });
}
