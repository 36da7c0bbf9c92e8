use std::fmt;
use std::ops::RangeInclusive;

/// One of the four adjustment knobs exposed by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Brightness,
    Contrast,
    Saturation,
    Scale,
}

impl Parameter {
    /// All parameters, in the order the adjustments panel shows them.
    pub const ALL: [Parameter; 4] = [
        Parameter::Brightness,
        Parameter::Contrast,
        Parameter::Saturation,
        Parameter::Scale,
    ];

    /// Inclusive range of values the parameter may take.
    pub fn range(self) -> RangeInclusive<i32> {
        match self {
            Parameter::Brightness | Parameter::Contrast | Parameter::Saturation => 0..=200,
            Parameter::Scale => 50..=150,
        }
    }

    pub fn default_value(self) -> i32 {
        100
    }

    pub fn label(self) -> &'static str {
        match self {
            Parameter::Brightness => "Brightness",
            Parameter::Contrast => "Contrast",
            Parameter::Saturation => "Saturation",
            Parameter::Scale => "Scale",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Parameter::Brightness => "☀",
            Parameter::Contrast => "◐",
            Parameter::Saturation => "🎨",
            Parameter::Scale => "🔍",
        }
    }

    /// Clamps `value` into [`Parameter::range`].
    pub fn clamp(self, value: i32) -> i32 {
        let range = self.range();
        value.clamp(*range.start(), *range.end())
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four bounded knobs of the non-destructive transform.
///
/// Every field is always populated and always inside its parameter's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdjustmentParameters {
    pub brightness: i32,
    pub contrast: i32,
    pub saturation: i32,
    pub scale: i32,
}

impl Default for AdjustmentParameters {
    fn default() -> Self {
        Self {
            brightness: Parameter::Brightness.default_value(),
            contrast: Parameter::Contrast.default_value(),
            saturation: Parameter::Saturation.default_value(),
            scale: Parameter::Scale.default_value(),
        }
    }
}

impl AdjustmentParameters {
    pub fn get(&self, parameter: Parameter) -> i32 {
        match parameter {
            Parameter::Brightness => self.brightness,
            Parameter::Contrast => self.contrast,
            Parameter::Saturation => self.saturation,
            Parameter::Scale => self.scale,
        }
    }

    /// Overwrites a single field, clamped to its range. Other fields are untouched.
    pub fn set(&mut self, parameter: Parameter, value: i32) {
        let value = parameter.clamp(value);
        match parameter {
            Parameter::Brightness => self.brightness = value,
            Parameter::Contrast => self.contrast = value,
            Parameter::Saturation => self.saturation = value,
            Parameter::Scale => self.scale = value,
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_neutral() {
        let params = AdjustmentParameters::default();
        for parameter in Parameter::ALL {
            assert_eq!(params.get(parameter), 100);
        }
        assert!(params.is_default());
    }

    #[test]
    fn default_is_inside_every_range() {
        for parameter in Parameter::ALL {
            assert!(parameter.range().contains(&parameter.default_value()));
        }
    }

    #[test]
    fn set_clamps_to_range() {
        let mut params = AdjustmentParameters::default();
        params.set(Parameter::Scale, 10);
        assert_eq!(params.scale, 50);
        params.set(Parameter::Scale, 400);
        assert_eq!(params.scale, 150);
        params.set(Parameter::Contrast, -5);
        assert_eq!(params.contrast, 0);
    }
}
