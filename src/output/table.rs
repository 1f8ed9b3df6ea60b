//! Minimal box-drawing table renderer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

/// Header spanning several adjacent columns
#[derive(Debug, Clone)]
struct Group {
    name: String,
    span: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    groups: Vec<Group>,
    rows: Vec<Vec<String>>,
    footer: Option<Vec<String>>,
}

impl Table {
    /// Columns default to left alignment for the first and right for the rest
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let aligns = (0..headers.len())
            .map(|i| if i == 0 { Align::Left } else { Align::Right })
            .collect();
        Self {
            headers,
            aligns,
            ..Default::default()
        }
    }

    /// Add a group header over the next `span` columns
    pub fn group(mut self, name: impl Into<String>, span: usize) -> Self {
        self.groups.push(Group {
            name: name.into(),
            span,
        });
        self
    }

    pub fn row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn footer<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.footer = Some(cells.into_iter().map(Into::into).collect());
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for cells in self.rows.iter().chain(self.footer.iter()) {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }
        // One space of padding on each side
        widths.into_iter().map(|w| w + 2).collect()
    }

    /// Column indices at which a group ends (exclusive)
    fn group_ends(&self) -> Vec<usize> {
        let mut ends = Vec::with_capacity(self.groups.len());
        let mut col = 0;
        for group in &self.groups {
            col += group.span;
            ends.push(col);
        }
        ends
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut lines = Vec::new();

        if self.groups.is_empty() {
            lines.push(border(&widths, '┌', '┬', '┐'));
        } else {
            let ends = self.group_ends();
            let group_widths: Vec<usize> = self
                .groups
                .iter()
                .zip(&ends)
                .map(|(group, end)| {
                    let cols = &widths[end - group.span..*end];
                    cols.iter().sum::<usize>() + cols.len().saturating_sub(1)
                })
                .collect();

            lines.push(border(&group_widths, '┌', '┬', '┐'));
            let names: Vec<&str> = self.groups.iter().map(|g| g.name.as_str()).collect();
            let centers = vec![Align::Center; names.len()];
            lines.push(cells_line(&group_widths, &names, &centers));

            // Column separators inside a group open downward only
            let mut sep = String::from("├");
            for (i, width) in widths.iter().enumerate() {
                sep.push_str(&"─".repeat(*width));
                if i + 1 == widths.len() {
                    sep.push('┤');
                } else if ends.contains(&(i + 1)) {
                    sep.push('┼');
                } else {
                    sep.push('┬');
                }
            }
            lines.push(sep);
        }

        let centers = vec![Align::Center; self.headers.len()];
        lines.push(cells_line(&widths, &self.headers, &centers));
        lines.push(border(&widths, '├', '┼', '┤'));

        for cells in &self.rows {
            lines.push(cells_line(&widths, cells, &self.aligns));
        }

        if let Some(footer) = &self.footer {
            lines.push(border(&widths, '├', '┼', '┤'));
            lines.push(cells_line(&widths, footer, &self.aligns));
        }

        lines.push(border(&widths, '└', '┴', '┘'));
        lines.join("\n")
    }
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(mid);
        }
        line.push_str(&"─".repeat(*width));
    }
    line.push(right);
    line
}

fn cells_line<S: AsRef<str>>(widths: &[usize], cells: &[S], aligns: &[Align]) -> String {
    let mut line = String::from("│");
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(AsRef::as_ref).unwrap_or("");
        let align = aligns.get(i).copied().unwrap_or(Align::Left);
        line.push_str(&pad(cell, *width, align));
        line.push('│');
    }
    line
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let inner = width.saturating_sub(2);
    let fill = inner.saturating_sub(cell.chars().count());
    let (left, right) = match align {
        Align::Left => (0, fill),
        Align::Right => (fill, 0),
        Align::Center => (fill / 2, fill - fill / 2),
    };
    format!(" {}{}{} ", " ".repeat(left), cell, " ".repeat(right))
}
