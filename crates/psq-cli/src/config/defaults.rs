pub struct DefaultsConfig {
    pub low_window_center: f64,
    pub low_window_width: f64,
    pub low_window_mirrored: bool,
    pub high_window_center: f64,
    pub high_window_width: f64,
    pub high_window_mirrored: bool,
    pub unbound_weight: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            low_window_center: 0.0,
            low_window_width: 0.25,
            low_window_mirrored: true,
            high_window_center: 6.0,
            high_window_width: 0.25,
            high_window_mirrored: false,
            unbound_weight: 0.1,
        }
    }
}
