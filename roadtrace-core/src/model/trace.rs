//! Recorded GPS traces

/// One position report from a vehicle log
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsFix {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Reported heading in degrees
    pub angle: f64,
    /// Reported speed in km/h
    pub speed_kmh: f64,
    /// Horizontal dilution of precision
    pub hdop: f64,
}

/// Fixes read from one named resource, in record order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceLog {
    /// Name of the resource the fixes came from
    pub source: String,
    pub fixes: Vec<GpsFix>,
}

impl TraceLog {
    pub(crate) fn empty(source: &str) -> Self {
        Self {
            source: source.to_owned(),
            fixes: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }
}
