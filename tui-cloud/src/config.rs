use crate::hsl::Hsl;

/// Endpoints of the weight-to-color ramp. Saturation and lightness are shared
/// by both ends; only the hue sweeps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub cold_hue: f32,
    pub hot_hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Palette {
    /// Low weight = cool blue, high weight = hot red.
    pub const HEATMAP: Self = Self {
        cold_hue: 220.0,
        hot_hue: 0.0,
        saturation: 0.9,
        lightness: 0.55,
    };

    /// Earlier blue-to-magenta ramp.
    pub const LEGACY: Self = Self {
        cold_hue: 220.0,
        hot_hue: 330.0,
        saturation: 0.8,
        lightness: 0.6,
    };

    pub fn cold(&self) -> Hsl {
        Hsl::new(self.cold_hue, self.saturation, self.lightness)
    }

    pub fn hot(&self) -> Hsl {
        Hsl::new(self.hot_hue, self.saturation, self.lightness)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::HEATMAP
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Distance from the camera to the sphere center along +z.
    pub distance: f32,
    pub fov_y_degrees: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            distance: 5.0,
            fov_y_degrees: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudConfig {
    pub radius: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub palette: Palette,
    /// Group spin about the vertical axis, rad/s.
    pub rotation_rate: f32,
    pub bob_amplitude: f32,
    /// Phase offset between consecutive items, radians.
    pub bob_phase_step: f32,
    pub hover_scale: f32,
    pub camera: Camera,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            radius: 2.5,
            min_size: 0.25,
            max_size: 1.0,
            palette: Palette::HEATMAP,
            rotation_rate: 0.15,
            bob_amplitude: 0.12,
            bob_phase_step: 0.7,
            hover_scale: 1.2,
            camera: Camera::default(),
        }
    }
}
