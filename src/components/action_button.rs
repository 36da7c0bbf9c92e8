use eframe::egui;

/// A filled, rounded button with an icon and a label, as used in the canvas toolbar.
pub struct ActionButton {
    pub icon: &'static str,
    pub label: &'static str,
    pub fill: egui::Color32,
    pub enabled: bool,
}

impl ActionButton {
    pub fn new(icon: &'static str, label: &'static str, fill: egui::Color32) -> Self {
        Self {
            icon,
            label,
            fill,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let padding = egui::vec2(16.0, 8.0);
        let font_id = egui::FontId::proportional(15.0);
        let galley = ui.painter().layout_no_wrap(
            format!("{}  {}", self.icon, self.label),
            font_id,
            egui::Color32::WHITE,
        );

        let button_size = galley.size() + 2.0 * padding;
        let sense = if self.enabled {
            egui::Sense::click()
        } else {
            egui::Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(button_size, sense);

        if ui.is_rect_visible(rect) {
            let bg_color = if !self.enabled {
                self.fill.gamma_multiply(0.4)
            } else if response.hovered() {
                lighten(self.fill, 24)
            } else {
                self.fill
            };

            ui.painter().rect_filled(rect, 8.0, bg_color);

            let text_pos = rect.center() - galley.size() / 2.0;
            let text_color = if self.enabled {
                egui::Color32::WHITE
            } else {
                egui::Color32::from_gray(160)
            };
            ui.painter().galley(text_pos, galley, text_color);
        }

        if self.enabled {
            response.on_hover_cursor(egui::CursorIcon::PointingHand)
        } else {
            response
        }
    }
}

fn lighten(color: egui::Color32, amount: u8) -> egui::Color32 {
    egui::Color32::from_rgba_premultiplied(
        color.r().saturating_add(amount),
        color.g().saturating_add(amount),
        color.b().saturating_add(amount),
        color.a(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_saturates() {
        let color = lighten(egui::Color32::from_rgb(250, 10, 0), 24);
        assert_eq!(color, egui::Color32::from_rgb(255, 34, 24));
    }

    #[test]
    fn disabled_button_does_not_click() {
        let button = ActionButton::new("⬇", "Save Image", egui::Color32::DARK_GREEN).enabled(false);
        assert!(!button.enabled);

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = button.show(ui);
                assert!(!response.clicked());
                assert!(response.rect.width() > 0.0);
            });
        });
    }
}
