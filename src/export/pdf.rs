use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs;
use std::path::Path;

const FONT: Name<'static> = Name(b"F1");

/// A4 portrait, sizes in points.
#[derive(Debug, Clone, Copy)]
struct Layout {
    width: f32,
    height: f32,
    margin: f32,
    row_height: f32,
    body_size: f32,
    head_size: f32,
    title_size: f32,
}

const A4: Layout = Layout {
    width: 595.0,
    height: 842.0,
    margin: 50.0,
    row_height: 20.0,
    body_size: 9.0,
    head_size: 10.0,
    title_size: 14.0,
};

/// Tabular PDF document built with `pdf-writer` (Helvetica, Latin-1).
///
/// Every call to [`TableDocument::add_table`] starts on a fresh page;
/// long tables flow onto as many pages as needed.
pub struct TableDocument {
    pdf: Pdf,
    catalog: Ref,
    page_tree: Ref,
    font: Ref,
    pages: Vec<Ref>,
    next_ref: i32,
    layout: Layout,
}

impl TableDocument {
    pub fn a4() -> Self {
        let mut pdf = Pdf::new();
        let font = Ref::new(3);
        pdf.type1_font(font).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog: Ref::new(1),
            page_tree: Ref::new(2),
            font,
            pages: Vec::new(),
            next_ref: 4,
            layout: A4,
        }
    }

    fn alloc(&mut self) -> Ref {
        let r = Ref::new(self.next_ref);
        self.next_ref += 1;
        r
    }

    /// Register a page and return the id its content stream must be written to.
    fn open_page(&mut self) -> Ref {
        let page = self.alloc();
        let stream = self.alloc();
        let l = self.layout;

        let mut writer = self.pdf.page(page);
        writer
            .parent(self.page_tree)
            .media_box(Rect::new(0.0, 0.0, l.width, l.height))
            .contents(stream);
        writer.resources().fonts().pair(FONT, self.font);

        self.pages.push(page);
        stream
    }

    pub fn add_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let l = self.layout;
        let widths = column_widths(&l, headers, rows);
        let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let rows_per_page =
            (((l.height - 2.0 * l.margin - 30.0) / l.row_height).floor() as usize).max(2) - 1;

        let mut chunks: Vec<&[Vec<String>]> = rows.chunks(rows_per_page).collect();
        if chunks.is_empty() {
            chunks.push(&[]);
        }

        for (n, chunk) in chunks.into_iter().enumerate() {
            let stream = self.open_page();
            let mut c = Content::new();

            text(&mut c, l.margin, l.height - l.margin + 15.0, l.title_size, title);
            text(
                &mut c,
                l.width - l.margin - 60.0,
                l.margin - 35.0,
                l.body_size,
                &format!("Page {}", n + 1),
            );

            let mut y = l.height - l.margin - 30.0;
            shade(&mut c, &l, y, &widths, 0.85);
            row(&mut c, &l, y, &widths, &header_cells, l.head_size);

            for (i, cells) in chunk.iter().enumerate() {
                y -= l.row_height;
                if i % 2 == 0 {
                    shade(&mut c, &l, y, &widths, 0.96);
                }
                row(&mut c, &l, y, &widths, cells, l.body_size);
            }

            self.pdf.stream(stream, &c.finish());
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog).pages(self.page_tree);
        self.pdf
            .pages(self.page_tree)
            .count(self.pages.len() as i32)
            .kids(self.pages.iter().copied());

        fs::write(path, self.pdf.finish())
    }
}

fn text(c: &mut Content, x: f32, y: f32, size: f32, value: &str) {
    let bytes = latin1_bytes(value);
    c.begin_text();
    c.set_font(FONT, size);
    c.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    c.show(Str(&bytes));
    c.end_text();
}

fn shade(c: &mut Content, l: &Layout, y: f32, widths: &[f32], grey: f32) {
    c.save_state();
    c.set_fill_rgb(grey, grey, grey + 0.03);
    c.rect(l.margin, y, widths.iter().sum(), l.row_height);
    c.fill_nonzero();
    c.restore_state();
}

fn row(c: &mut Content, l: &Layout, y: f32, widths: &[f32], cells: &[String], size: f32) {
    let mut x = l.margin;

    for (cell, w) in cells.iter().zip(widths) {
        text(c, x + 4.0, y + 6.0, size, &fit_to_width(cell, w - 8.0, size));

        c.save_state();
        c.set_stroke_rgb(0.65, 0.65, 0.65);
        c.rect(x, y, *w, l.row_height);
        c.stroke();
        c.restore_state();

        x += w;
    }
}

/// Widest cell per column, scaled down proportionally when the table would
/// overflow the printable width.
fn column_widths(l: &Layout, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
    let mut widths: Vec<f32> = headers
        .iter()
        .map(|h| text_width(h, l.head_size) + 10.0)
        .collect();

    for cells in rows {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = w.max(text_width(cell, l.body_size) + 10.0);
        }
    }

    let printable = l.width - 2.0 * l.margin;
    let total: f32 = widths.iter().sum();
    if total > printable {
        widths.iter_mut().for_each(|w| *w *= printable / total);
    }

    widths
}

/// Rough Helvetica width: half the font size per character.
fn text_width(value: &str, size: f32) -> f32 {
    value.chars().count() as f32 * size * 0.5
}

/// Cut `value` with an ellipsis so it fits in `max_w` points.
fn fit_to_width(value: &str, max_w: f32, size: f32) -> String {
    let max_chars = (max_w / (size * 0.5)).floor().max(0.0) as usize;
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut s: String = value.chars().take(max_chars.saturating_sub(3)).collect();
    s.push_str("...");
    s
}

/// Standard Type1 fonts only cover Latin-1; anything else becomes '?'.
fn latin1_bytes(value: &str) -> Vec<u8> {
    value
        .chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}
