use console::{style, StyledObject};
use std::path::Path;

use crate::ir::Summary;

const INDENT_SIZE: usize = 2;

pub struct BulletPointPrinter<W: LineWriter + Clone> {
    writer: W,
    nesting: usize,
}

impl<W: LineWriter + Clone> BulletPointPrinter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, nesting: 0 }
    }

    pub fn print_line(&self, line: impl std::fmt::Display) {
        let indent = " ".repeat(self.nesting * INDENT_SIZE);
        self.writer.write_line(&format!("{}{}", indent, line));
    }

    pub fn print_item(&self, message: impl std::fmt::Display) {
        self.print_line(format_args!("• {}", message));
    }

    pub fn indent(&self) -> Self {
        Self {
            writer: self.writer.clone(),
            nesting: self.nesting + 1,
        }
    }
}

impl BulletPointPrinter<StdoutLineWriter> {
    pub fn new_stdout() -> Self {
        Self::new(StdoutLineWriter)
    }
}

pub trait LineWriter {
    fn write_line(&self, line: &str);
}

#[derive(Clone, Copy)]
pub struct StdoutLineWriter;
impl LineWriter for StdoutLineWriter {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}

pub fn print_summary<W: LineWriter + Clone>(printer: &BulletPointPrinter<W>, summary: &Summary) {
    printer.print_line(style_header("Summary:"));
    let items = printer.indent();
    items.print_item(format_args!("Rows read: {}", style_count(summary.rows_read)));
    items.print_item(format_args!("Rows dropped: {}", style_count(summary.rows_dropped)));
    items.print_item(format_args!("Rows written: {}", style_count(summary.rows_written)));
}

pub fn print_wrote<W: LineWriter + Clone>(printer: &BulletPointPrinter<W>, output_path: &Path) {
    printer.print_line(format_args!("Wrote: {}", style(output_path.display()).cyan()));
}

fn style_header(header: &str) -> StyledObject<&str> {
    style(header).bold().underlined()
}

fn style_count(count: usize) -> StyledObject<usize> {
    style(count).bold()
}
