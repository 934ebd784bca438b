// src/map.rs
//
// Single-marker coordinate map: validated coordinates, an equirectangular
// viewport and projection into any w×h surface.

use crate::config::consts::{MARKER_POPUP, MAX_ZOOM};
use crate::error::{GdpError, Result};

pub const LAT_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LON_RANGE: (f64, f64) = (-180.0, 180.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Bounds are inclusive; NaN is rejected.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        check("latitude", lat, LAT_RANGE)?;
        check("longitude", lon, LON_RANGE)?;
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 { self.lat }
    pub fn lon(&self) -> f64 { self.lon }
}

fn check(axis: &'static str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if value.is_nan() || value < min || value > max {
        return Err(GdpError::CoordinateOutOfRange { axis, value, min, max });
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub at: Coordinate,
    pub popup: String,
}

/// Visible lat/lon window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl Bounds {
    pub fn contains(&self, c: Coordinate) -> bool {
        (self.south..=self.north).contains(&c.lat) && (self.west..=self.east).contains(&c.lon)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
    pub markers: Vec<Marker>,
}

impl MapView {
    /// One marker, centered on it.
    pub fn single(lat: f64, lon: f64, zoom: u8) -> Result<Self> {
        let at = Coordinate::new(lat, lon)?;
        Ok(Self {
            center: at,
            zoom: zoom.min(MAX_ZOOM),
            markers: vec![Marker { at, popup: s!(MARKER_POPUP) }],
        })
    }

    /// Each zoom level halves the span. The window slides to stay inside the world.
    pub fn bounds(&self) -> Bounds {
        let scale = f64::from(1u32 << self.zoom.min(MAX_ZOOM));
        let half_lat = (LAT_RANGE.1 - LAT_RANGE.0) / scale / 2.0;
        let half_lon = (LON_RANGE.1 - LON_RANGE.0) / scale / 2.0;

        let lat = self.center.lat.clamp(LAT_RANGE.0 + half_lat, LAT_RANGE.1 - half_lat);
        let lon = self.center.lon.clamp(LON_RANGE.0 + half_lon, LON_RANGE.1 - half_lon);

        Bounds {
            south: lat - half_lat,
            north: lat + half_lat,
            west: lon - half_lon,
            east: lon + half_lon,
        }
    }

    /// Surface position of `c` in a `w`×`h` rect with origin top-left,
    /// or `None` when it falls outside the viewport.
    pub fn project(&self, c: Coordinate, w: f32, h: f32) -> Option<(f32, f32)> {
        let b = self.bounds();
        if !b.contains(c) {
            return None;
        }
        let x = (c.lon - b.west) / (b.east - b.west);
        let y = (b.north - c.lat) / (b.north - b.south);
        Some((x as f32 * w, y as f32 * h))
    }

    /// Graticule spacing in degrees for this zoom.
    pub fn graticule_step(&self) -> f64 {
        match self.zoom {
            0 | 1 => 30.0,
            2 => 15.0,
            3 => 10.0,
            4 => 5.0,
            _ => 2.0,
        }
    }

    /// Graticule lines inside the viewport: (latitudes, longitudes).
    pub fn graticule(&self) -> (Vec<f64>, Vec<f64>) {
        let b = self.bounds();
        let step = self.graticule_step();
        let lines = |lo: f64, hi: f64| {
            let mut v = Vec::new();
            let mut x = (lo / step).ceil() * step;
            while x <= hi {
                v.push(x);
                x += step;
            }
            v
        };
        (lines(b.south, b.north), lines(b.west, b.east))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn san_francisco_renders_on_world_view() {
        let m = MapView::single(37.7749, -122.4194, 0).unwrap();
        let (x, y) = m.project(m.markers[0].at, 360.0, 180.0).unwrap();
        assert!((x - 57.58).abs() < 0.01);
        assert!((y - 52.23).abs() < 0.01);
        assert_eq!(m.markers[0].popup, "Your location");
    }

    #[test]
    fn boundary_coordinates_accepted() {
        let m = MapView::single(90.0, -180.0, 0).unwrap();
        assert_eq!(m.project(m.markers[0].at, 100.0, 50.0), Some((0.0, 0.0)));
        assert!(Coordinate::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(matches!(
            Coordinate::new(90.5, 0.0),
            Err(GdpError::CoordinateOutOfRange { axis: "latitude", .. })
        ));
        assert!(matches!(
            Coordinate::new(0.0, -181.0),
            Err(GdpError::CoordinateOutOfRange { axis: "longitude", .. })
        ));
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn zoomed_view_stays_in_world() {
        let m = MapView::single(89.0, 179.0, 2).unwrap();
        let b = m.bounds();
        assert_eq!(b.north, 90.0);
        assert_eq!(b.east, 180.0);
        assert_eq!(b.north - b.south, 45.0);
        assert!(m.project(m.markers[0].at, 100.0, 100.0).is_some());
    }

    #[test]
    fn point_outside_zoomed_view_is_hidden() {
        let m = MapView::single(0.0, 0.0, 3).unwrap();
        let far = Coordinate::new(50.0, 100.0).unwrap();
        assert_eq!(m.project(far, 100.0, 100.0), None);
    }

    #[test]
    fn zoom_is_capped() {
        let m = MapView::single(0.0, 0.0, 200).unwrap();
        assert_eq!(m.zoom, MAX_ZOOM);
    }

    #[test]
    fn world_graticule() {
        let m = MapView::single(0.0, 0.0, 0).unwrap();
        let (lats, lons) = m.graticule();
        assert_eq!(lats.len(), 7);
        assert_eq!(lons.len(), 13);
    }
}
