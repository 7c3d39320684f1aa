use std::fmt::Write;

use crate::journey::{JourneyResult, JourneySegment};
use crate::travel::HOURS_PER_DAY;

/// Presentation style for turning a [`JourneyResult`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyRenderMode {
    PlainText,
    RichText,
    Note,
}

/// Format a duration in hours as days and hours, e.g. `2d 3.5h`.
pub fn format_duration(hours: f64) -> String {
    if !hours.is_finite() {
        return "unreachable".to_string();
    }
    // Round before splitting so 47.99h becomes 2d 0.0h, not 1d 24.0h.
    let hours = (hours * 10.0).round() / 10.0;
    let days = (hours / HOURS_PER_DAY).floor();
    let rest = hours - days * HOURS_PER_DAY;
    if days >= 1.0 {
        format!("{days:.0}d {rest:.1}h")
    } else {
        format!("{rest:.1}h")
    }
}

fn segment_via(segment: &JourneySegment) -> String {
    if segment.biomes_traversed.is_empty() {
        segment.kind().to_string()
    } else {
        format!("{} via {}", segment.kind(), segment.biomes_traversed.join(", "))
    }
}

impl JourneyResult {
    /// Render the journey using the requested textual mode.
    pub fn render(&self, mode: JourneyRenderMode) -> String {
        match mode {
            JourneyRenderMode::PlainText => self.render_plain(),
            JourneyRenderMode::RichText => self.render_rich(),
            JourneyRenderMode::Note => self.render_note(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        if !self.path_found() {
            let _ = writeln!(
                buffer,
                "No route from {} to {}.",
                self.origin(),
                self.destination()
            );
            return buffer;
        }

        let _ = writeln!(
            buffer,
            "Journey: {} -> {} ({} legs)",
            self.origin(),
            self.destination(),
            self.hop_count()
        );
        for (index, segment) in self.segments().iter().enumerate() {
            let _ = writeln!(
                buffer,
                "{:>3}: {} -> {} ({:.1} km {}, {}, {:.2} gold)",
                index + 1,
                segment.start.name(),
                segment.end.name(),
                segment.distance_km,
                segment_via(segment),
                format_duration(segment.time_hours),
                segment.cost
            );
        }
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "Total distance: {:.1} km", self.total_distance_km());
        let _ = writeln!(
            buffer,
            "Total time: {}",
            format_duration(self.total_time_hours())
        );
        let _ = writeln!(buffer, "Total cost: {:.2} gold", self.total_cost());
        let _ = writeln!(
            buffer,
            "Supplies: {:.1} rations, {:.1} L water",
            self.rations(),
            self.water_liters()
        );
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        if !self.path_found() {
            let _ = writeln!(
                buffer,
                "**No route**: _{} → {}_",
                self.origin(),
                self.destination()
            );
            return buffer;
        }

        let _ = writeln!(
            buffer,
            "**Journey**: _{} → {}_ ({} legs, {:.1} km)",
            self.origin(),
            self.destination(),
            self.hop_count(),
            self.total_distance_km()
        );
        for (index, segment) in self.segments().iter().enumerate() {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** → **{}** (`{}`, {:.1} km, {})",
                index + 1,
                segment.start.name(),
                segment.end.name(),
                segment.kind(),
                segment.distance_km,
                format_duration(segment.time_hours)
            );
        }
        let _ = writeln!(
            buffer,
            "\n_{} · {:.2} gold · {:.1} rations · {:.1} L water_",
            format_duration(self.total_time_hours()),
            self.total_cost(),
            self.rations(),
            self.water_liters()
        );
        buffer
    }

    fn render_note(&self) -> String {
        let mut buffer = String::new();
        if !self.path_found() {
            let _ = writeln!(
                buffer,
                "{} -> {}: no route",
                self.origin().name(),
                self.destination().name()
            );
            return buffer;
        }

        let mut stops = vec![self.origin().name()];
        stops.extend(self.segments().iter().map(|segment| segment.end.name()));
        let _ = writeln!(buffer, "{}", stops.join(" > "));
        let _ = writeln!(
            buffer,
            "{:.0} km, {}, {:.0} gold",
            self.total_distance_km(),
            format_duration(self.total_time_hours()),
            self.total_cost()
        );
        buffer
    }
}
