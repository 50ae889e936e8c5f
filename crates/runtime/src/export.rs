use std::io::{self, Write};

use analysis::ConvergencePoint;

pub const CONVERGENCE_CSV_HEADER: &str = "trial,cumulative_success_rate\n";

pub struct ConvergenceCsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> ConvergenceCsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.writer.write_all(CONVERGENCE_CSV_HEADER.as_bytes())
    }

    pub fn append_series(&mut self, series: &[ConvergencePoint]) -> io::Result<()> {
        for point in series {
            writeln!(
                self.writer,
                "{},{}",
                point.trial, point.cumulative_success_rate
            )?;
        }
        self.writer.flush()
    }
}
