use eframe::egui::{
    self,
    Align2,
    FontId,
    Pos2,
    RichText,
    Shape,
    Stroke,
    Vec2,
};

use crate::core::{
    today_string,
    RecordTable,
};
use crate::gui::theme::Theme;

pub fn show(ui: &mut egui::Ui, table: &RecordTable, theme: &Theme) {
    ui.heading("Dashboard");
    ui.add_space(8.0);

    if table.is_empty() {
        ui.colored_label(
            theme.cyan(ui.ctx()),
            "No records yet. Log your first missed question under Add Record.",
        );
        return;
    }

    ui.horizontal(|ui| {
        metric_tile(ui, theme, "Total mistakes", table.len());
        metric_tile(ui, theme, "Added today", table.count_on(&today_string()));
    });

    ui.add_space(10.0);
    ui.separator();
    ui.add_space(6.0);

    let ctx = ui.ctx().clone();
    ui.columns(2, |columns| {
        let skill_heading = theme.heading(&ctx, "Skill profile");
        columns[0].label(skill_heading);
        columns[0].add_space(4.0);
        radar_chart(&mut columns[0], table, theme);

        let missed_heading = theme.heading(&ctx, "Most missed");
        columns[1].label(missed_heading);
        columns[1].add_space(4.0);
        top_errors_list(&mut columns[1], table, theme);
    });
}

fn metric_tile(ui: &mut egui::Ui, theme: &Theme, label: &str, value: usize) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.label(label);
            ui.label(
                RichText::new(value.to_string())
                    .size(28.0)
                    .color(theme.orange(ui.ctx()))
                    .strong(),
            );
        });
    });
}

fn top_errors_list(ui: &mut egui::Ui, table: &RecordTable, theme: &Theme) {
    for record in table.top_errors(3) {
        let tag_color = theme.category_color(ui.ctx(), record.category);
        ui.horizontal_wrapped(|ui| {
            ui.colored_label(tag_color, format!("[{}]", record.category.label()));
            ui.label(&record.question);
            ui.colored_label(
                theme.red(ui.ctx()),
                format!("(missed {}x)", record.error_count),
            );
        });
        ui.add_space(2.0);
    }
}

/// Polar chart of the category distribution: one axis per category present,
/// value polygon closed and filled, circular grid rings underneath.
fn radar_chart(ui: &mut egui::Ui, table: &RecordTable, theme: &Theme) {
    let counts = table.category_counts();
    if counts.is_empty() {
        return;
    }

    let (rect, _) = ui.allocate_exact_size(egui::vec2(280.0, 240.0), egui::Sense::hover());
    let painter = ui.painter();
    let center = rect.center();
    let radius = rect.width().min(rect.height()) * 0.36;
    let max = counts.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1) as f32;

    let grid = theme.grid(ui.ctx());
    for step in 1..=4 {
        painter.circle_stroke(center, radius * step as f32 / 4.0, Stroke::new(1.0, grid));
    }

    let axis_count = counts.len();
    let angle_of = |i: usize| {
        -std::f32::consts::FRAC_PI_2 + std::f32::consts::TAU * i as f32 / axis_count as f32
    };

    for (i, (category, count)) in counts.iter().enumerate() {
        let direction = Vec2::angled(angle_of(i));
        painter.line_segment([center, center + radius * direction], Stroke::new(1.0, grid));
        painter.text(
            center + (radius + 18.0) * direction,
            Align2::CENTER_CENTER,
            format!("{} ({})", category.label(), count),
            FontId::proportional(12.0),
            theme.category_color(ui.ctx(), *category),
        );
    }

    let points: Vec<Pos2> = counts
        .iter()
        .enumerate()
        .map(|(i, (_, count))| center + radius * (*count as f32 / max) * Vec2::angled(angle_of(i)))
        .collect();

    let accent = theme.cyan(ui.ctx());
    if points.len() >= 3 {
        painter.add(Shape::convex_polygon(points.clone(), accent.linear_multiply(0.25), Stroke::NONE));
    }
    if points.len() >= 2 {
        painter.add(Shape::closed_line(points.clone(), Stroke::new(2.0, accent)));
    }
    for point in points {
        painter.circle_filled(point, 3.0, accent);
    }
}
