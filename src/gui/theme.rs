use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};

use crate::core::Category;

/// Accent palette for one visual mode. Base chrome colors feed the egui
/// visuals; the named accents are used directly by the views.
#[derive(Clone)]
struct Palette {
    background: Color32,
    panel: Color32,
    faint: Color32,
    foreground: Color32,
    selection: Color32,
    red: Color32,
    orange: Color32,
    yellow: Color32,
    green: Color32,
    purple: Color32,
    cyan: Color32,
}

impl Palette {
    fn night() -> Self {
        Self {
            background: Color32::from_rgb(23, 24, 38),
            panel: Color32::from_rgb(27, 29, 45),
            faint: Color32::from_rgb(19, 20, 32),
            foreground: Color32::from_rgb(204, 204, 204),
            selection: Color32::from_rgb(68, 71, 90),
            red: Color32::from_rgb(255, 121, 121),
            orange: Color32::from_rgb(255, 161, 90),
            yellow: Color32::from_rgb(241, 250, 140),
            green: Color32::from_rgb(86, 209, 123),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(97, 175, 239),
        }
    }

    fn day() -> Self {
        Self {
            background: Color32::from_rgb(240, 240, 250),
            panel: Color32::from_rgb(230, 230, 245),
            faint: Color32::from_rgb(220, 220, 240),
            foreground: Color32::from_rgb(40, 40, 40),
            selection: Color32::from_rgb(200, 200, 230),
            red: Color32::from_rgb(200, 80, 80),
            orange: Color32::from_rgb(220, 140, 60),
            yellow: Color32::from_rgb(180, 170, 60),
            green: Color32::from_rgb(60, 160, 90),
            purple: Color32::from_rgb(150, 120, 200),
            cyan: Color32::from_rgb(60, 140, 190),
        }
    }
}

#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Theme { dark: Palette::night(), light: Palette::day() }
    }
}

impl Theme {
    fn palette(&self, ctx: &egui::Context) -> &Palette {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).purple)
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).red
    }

    pub fn orange(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).orange
    }

    pub fn yellow(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).yellow
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).green
    }

    pub fn cyan(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).cyan
    }

    pub fn grid(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).selection
    }

    /// One stable accent per skill area, shared by the radar chart and the
    /// category tags in the lists.
    pub fn category_color(&self, ctx: &egui::Context, category: Category) -> Color32 {
        let palette = self.palette(ctx);
        match category {
            Category::Listening => palette.cyan,
            Category::Reading => palette.green,
            Category::Vocabulary => palette.orange,
            Category::Grammar => palette.purple,
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            hyperlink_color: palette.cyan,
            faint_bg_color: palette.faint,
            extreme_bg_color: palette.faint,
            code_bg_color: palette.panel,
            error_fg_color: palette.red,
            warn_fg_color: palette.orange,
            window_fill: palette.background,
            window_stroke: Stroke { color: palette.selection, ..default.window_stroke },
            panel_fill: palette.panel,
            selection: egui::style::Selection {
                bg_fill: palette.selection,
                stroke: Stroke { color: palette.foreground, ..default.selection.stroke },
            },
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
    });
}
