use crate::palette::Palette;
use dbdo_types::{Record, RowGroup};
use std::fmt;
use std::io;

/// Spaces between a padded label and its value
pub const VALUE_GAP: usize = 3;

pub const NO_RESULTS: &str = "NO RESULTS";

/// Grid dimensions for one render call. Never cached: the terminal may have
/// been resized since the previous call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub terminal_width: usize,
    /// Every label is padded or truncated to this many characters
    pub label_width: usize,
    /// Minimum horizontal space a single cell needs
    pub cell_width: usize,
    pub column_count: usize,
    /// Horizontal space each visual column gets
    pub column_width: usize,
    pub rows_per_column: usize,
}

impl Geometry {
    /// Returns `None` when there is nothing to lay out.
    pub fn compute(groups: &[RowGroup], terminal_width: usize) -> Option<Geometry> {
        if groups.is_empty() {
            return None;
        }

        let records = || groups.iter().flatten();

        let label_width = records()
            .map(|record| char_len(record.label()))
            .max()
            .unwrap_or(0);

        let cell_width = records()
            .map(|record| label_width + VALUE_GAP + char_len(record.display_text()))
            .max()
            .unwrap_or(label_width + VALUE_GAP);

        let column_count = (terminal_width / cell_width).max(1);
        let column_width = terminal_width / column_count;
        let rows_per_column = groups.len().div_ceil(column_count);

        Some(Geometry {
            terminal_width,
            label_width,
            cell_width,
            column_count,
            column_width,
            rows_per_column,
        })
    }
}

/// Split `groups` into `column_count` contiguous slices, top-to-bottom then
/// left-to-right. Trailing slices may be short or empty.
pub fn partition(groups: &[RowGroup], column_count: usize) -> Vec<&[RowGroup]> {
    let column_count = column_count.max(1);
    let rows_per_column = groups.len().div_ceil(column_count).max(1);

    let mut columns: Vec<&[RowGroup]> = groups.chunks(rows_per_column).collect();
    columns.resize(column_count, &[]);
    columns
}

/// Pad `label` with spaces, or cut it, to exactly `width` characters.
/// Truncation is silent: no ellipsis.
pub fn fit_to_width(label: &str, width: usize) -> String {
    let len = char_len(label);
    if len > width {
        label.chars().take(width).collect()
    } else {
        let mut fitted = String::with_capacity(label.len() + width - len);
        fitted.push_str(label);
        fitted.extend(std::iter::repeat_n(' ', width - len));
        fitted
    }
}

/// The whole grid for one set of row-groups.
pub struct GridView<'a> {
    groups: &'a [RowGroup],
    geometry: Option<Geometry>,
    palette: &'a Palette,
}

impl<'a> GridView<'a> {
    pub fn new(groups: &'a [RowGroup], terminal_width: usize, palette: &'a Palette) -> Self {
        Self {
            groups,
            geometry: Geometry::compute(groups, terminal_width),
            palette,
        }
    }

    fn write_cell(
        &self,
        f: &mut fmt::Formatter<'_>,
        geometry: &Geometry,
        record: &Record,
        last_column: bool,
    ) -> fmt::Result {
        let text = record.display_text();
        let used = geometry.label_width + VALUE_GAP + char_len(text);
        let pad = if last_column {
            0
        } else {
            geometry.column_width.saturating_sub(used)
        };

        write!(
            f,
            "{}{}{:gap$}{}{}{}{:pad$}",
            self.palette.escape(record.label_color()),
            fit_to_width(record.label(), geometry.label_width),
            "",
            self.palette.escape(record.value_color()),
            text,
            self.palette.reset(),
            "",
            gap = VALUE_GAP,
            pad = pad,
        )
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(geometry) = self.geometry else {
            writeln!(f)?;
            writeln!(f, "{}", NO_RESULTS)?;
            return writeln!(f);
        };

        let columns = partition(self.groups, geometry.column_count);

        for y in 0..geometry.rows_per_column {
            let height = columns
                .iter()
                .filter_map(|column| column.get(y))
                .map(|group| group.len())
                .max()
                .unwrap_or(0);

            writeln!(f)?;
            for line in 0..height {
                let cells: Vec<Option<&Record>> = columns
                    .iter()
                    .map(|column| column.get(y).and_then(|group| group.get(line)))
                    .collect();

                // Nothing is written past the rightmost occupied column
                let last = cells.iter().rposition(Option::is_some).unwrap_or(0);

                for (x, cell) in cells.iter().take(last + 1).enumerate() {
                    match cell {
                        Some(record) => self.write_cell(f, &geometry, record, x == last)?,
                        None => write!(f, "{:width$}", "", width = geometry.column_width)?,
                    }
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Lay out `groups` for a terminal `terminal_width` columns wide and write the
/// result to `out`.
pub fn render<W: io::Write>(
    groups: &[RowGroup],
    terminal_width: usize,
    palette: &Palette,
    out: &mut W,
) -> io::Result<()> {
    let view = GridView::new(groups, terminal_width, palette);
    write!(out, "{}", view)?;
    out.flush()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbdo_types::{Color, ValueType};

    fn group(cells: &[(&str, &str)]) -> RowGroup {
        cells
            .iter()
            .map(|(label, text)| Record::new(ValueType::Text, *label, *text))
            .collect()
    }

    fn render_plain(groups: &[RowGroup], width: usize) -> String {
        let mut out = Vec::new();
        render(groups, width, &Palette::plain(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_renders_no_results() {
        assert_eq!(render_plain(&[], 80), "\nNO RESULTS\n\n");
        assert_eq!(Geometry::compute(&[], 80), None);
    }

    #[test]
    fn test_single_cell() {
        let groups = vec![group(&[("id", "1")])];
        let geometry = Geometry::compute(&groups, 80).unwrap();
        assert_eq!(geometry.label_width, 2);
        assert_eq!(geometry.cell_width, 6);
        assert_eq!(geometry.column_count, 13);
        assert_eq!(geometry.rows_per_column, 1);

        // Only the first of the thirteen columns is occupied
        let out = render_plain(&groups, 80);
        assert_eq!(out, "\nid   1\n\n");
    }

    #[test]
    fn test_single_cell_with_colors() {
        let groups = vec![group(&[("id", "1")])];
        let palette = Palette::ansi();
        let mut out = Vec::new();
        render(&groups, 6, &palette, &mut out).unwrap();

        let expected = format!(
            "\n{}id   {}1{}\n\n",
            palette.reset(),
            palette.escape(Color::Textual),
            palette.reset()
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_scenario_ten_groups_five_columns() {
        // label 7 + gap 3 + value 10 = 20 columns per cell
        let groups: Vec<RowGroup> = (0..10)
            .map(|i| group(&[("column7", format!("value-{:04}", i).as_str())]))
            .collect();

        let geometry = Geometry::compute(&groups, 100).unwrap();
        assert_eq!(geometry.cell_width, 20);
        assert_eq!(geometry.column_count, 5);
        assert_eq!(geometry.column_width, 20);
        assert_eq!(geometry.rows_per_column, 2);

        let columns = partition(&groups, geometry.column_count);
        assert_eq!(columns[1][0], groups[5]);
    }

    #[test]
    fn test_column_count_is_at_least_one() {
        let groups = vec![group(&[("a_very_long_label", "and an even longer value")])];
        let geometry = Geometry::compute(&groups, 10).unwrap();
        assert_eq!(geometry.column_count, 1);
        assert_eq!(geometry.column_width, 10);

        // Overflow is accepted rather than wrapped
        let out = render_plain(&groups, 10);
        assert_eq!(out, "\na_very_long_label   and an even longer value\n\n");

        let geometry = Geometry::compute(&groups, 0).unwrap();
        assert_eq!(geometry.column_count, 1);
    }

    #[test]
    fn test_partition_covers_input_in_order() {
        let groups: Vec<RowGroup> = (0..7)
            .map(|i| group(&[("n", i.to_string().as_str())]))
            .collect();
        for column_count in 1..=9 {
            let columns = partition(&groups, column_count);
            assert_eq!(columns.len(), column_count);
            let rejoined: Vec<RowGroup> = columns.concat();
            assert_eq!(rejoined, groups, "column_count {}", column_count);
        }
    }

    #[test]
    fn test_partition_is_column_major() {
        let groups: Vec<RowGroup> = (0..5)
            .map(|i| group(&[("n", i.to_string().as_str())]))
            .collect();
        let columns = partition(&groups, 4);
        let sizes: Vec<usize> = columns.iter().map(|c| c.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1, 0]);
        assert_eq!(columns[0], &groups[0..2]);
        assert_eq!(columns[2], &groups[4..5]);
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("id", 5), "id   ");
        assert_eq!(fit_to_width("identifier", 5), "ident");
        assert_eq!(fit_to_width("", 3), "   ");
        assert_eq!(fit_to_width("héllo", 2), "hé");
        for label in ["a", "abc", "abcdef", "ünïcödé"] {
            for width in 0..8 {
                let fitted = fit_to_width(label, width);
                assert_eq!(fitted.chars().count(), width);
                if label.chars().count() > width {
                    let expected: String = label.chars().take(width).collect();
                    assert_eq!(fitted, expected);
                }
            }
        }
    }

    #[test]
    fn test_uneven_groups_are_padded_with_filler() {
        let groups = vec![
            group(&[("a", "1"), ("b", "2"), ("c", "3")]),
            group(&[("a", "4")]),
        ];
        // cell width 1 + 3 + 1 = 5; width 10 gives two columns of 5
        let out = render_plain(&groups, 10);
        assert_eq!(out, "\na   1a   4\nb   2\nc   3\n\n");
    }

    #[test]
    fn test_trailing_pad_only_between_columns() {
        let groups = vec![group(&[("id", "1")]), group(&[("id", "22")])];
        // cell width 2 + 3 + 2 = 7; width 16 gives two columns of 8
        let out = render_plain(&groups, 16);
        assert_eq!(out, "\nid   1  id   22\n\n");
        for line in out.lines() {
            assert_eq!(line, line.trim_end());
        }
    }

    #[test]
    fn test_rows_stack_with_blank_lines_between_super_rows() {
        let groups = vec![group(&[("id", "1")]), group(&[("id", "2")])];
        // A single column: one super-row per group
        let out = render_plain(&groups, 7);
        assert_eq!(out, "\nid   1\n\n\nid   2\n\n");
    }

    #[test]
    fn test_labels_are_padded_to_common_width() {
        let groups = vec![group(&[("id", "1"), ("username", "bob")])];
        let out = render_plain(&groups, 20);
        let lines: Vec<&str> = out.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, vec![format!("{:<8}   1", "id"), "username   bob".to_string()]);
    }

    #[test]
    fn test_filler_keeps_later_columns_aligned() {
        let groups = vec![
            group(&[("a", "1")]),
            group(&[("a", "2"), ("b", "3")]),
            group(&[("a", "4"), ("b", "5")]),
        ];
        // cell width 5, width 15: three columns of 5, one group each
        let out = render_plain(&groups, 15);
        assert_eq!(out, "\na   1a   2a   4\n     b   3b   5\n\n");
    }

    #[test]
    fn test_line_break_in_label_stays_on_one_line() {
        let groups = vec![group(&[("a\nb", "1"), ("c", "2")])];
        assert_eq!(Geometry::compute(&groups, 80).unwrap().label_width, 3);
        assert_eq!(render_plain(&groups, 80), "\na b   1\nc     2\n\n");
    }

    #[test]
    fn test_render_is_idempotent() {
        let groups: Vec<RowGroup> = (0..12)
            .map(|i| group(&[("id", i.to_string().as_str()), ("name", "x")]))
            .collect();
        assert_eq!(render_plain(&groups, 57), render_plain(&groups, 57));
    }
}
