//! Renderable vehicles.

use serde::{Deserialize, Serialize};

/// Capability of anything that can describe itself as a vehicle.
///
/// New vehicle kinds implement this trait without touching existing ones;
/// callers that hold a `&dyn RenderableVehicle` see the shared attributes and
/// a rendering, nothing more.
pub trait RenderableVehicle {
    fn speed(&self) -> f64;
    fn length(&self) -> f64;
    fn model_name(&self) -> &str;

    /// Human-readable rendering of the vehicle's attributes.
    ///
    /// The format is stable for a given instance but each implementor owns its
    /// own layout; there is no shared base rendering to extend.
    fn render(&self) -> String;
}

/// A generic vehicle: speed, length and model name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    speed: f64,
    length: f64,
    model_name: String,
}

impl Vehicle {
    pub fn new(speed: f64, length: f64, model_name: impl Into<String>) -> Self {
        Self {
            speed,
            length,
            model_name: model_name.into(),
        }
    }
}

impl RenderableVehicle for Vehicle {
    fn speed(&self) -> f64 {
        self.speed
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn render(&self) -> String {
        format!("Vehicle {{ {} {} {} }}", self.speed, self.length, self.model_name)
    }
}

impl core::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render())
    }
}

/// A plane: a vehicle with a cruising height.
///
/// Composes the shared attributes instead of inheriting them; attribute
/// accessors delegate to the embedded [`Vehicle`], while `render` replaces the
/// base rendering entirely (height first, then the shared attributes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    height: f64,
    vehicle: Vehicle,
}

impl Plane {
    pub fn new(height: f64, speed: f64, length: f64, model_name: impl Into<String>) -> Self {
        Self {
            height,
            vehicle: Vehicle::new(speed, length, model_name),
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl RenderableVehicle for Plane {
    fn speed(&self) -> f64 {
        self.vehicle.speed()
    }

    fn length(&self) -> f64 {
        self.vehicle.length()
    }

    fn model_name(&self) -> &str {
        self.vehicle.model_name()
    }

    fn render(&self) -> String {
        format!(
            "Plane {{ {} {} {} {} }}",
            self.height,
            self.vehicle.speed(),
            self.vehicle.length(),
            self.vehicle.model_name()
        )
    }
}

impl core::fmt::Display for Plane {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_plane() -> Plane {
        Plane::new(1.5, 900.0, 70.0, "A320")
    }

    #[test]
    fn plane_renders_all_four_attributes_in_order() {
        let rendered = test_plane().render();
        let height = rendered.find("1.5").unwrap();
        let speed = rendered.find("900").unwrap();
        let length = rendered.find("70").unwrap();
        let model = rendered.find("A320").unwrap();
        assert!(height < speed && speed < length && length < model);
    }

    #[test]
    fn plane_rendering_replaces_the_vehicle_rendering() {
        let plane = test_plane();
        let base = Vehicle::new(900.0, 70.0, "A320");
        assert_ne!(plane.render(), base.render());
        assert!(plane.render().starts_with("Plane {"));
        assert!(base.render().starts_with("Vehicle {"));
    }

    #[test]
    fn plane_exposes_inherited_attributes() {
        let plane = test_plane();
        assert_eq!(plane.height(), 1.5);
        assert_eq!(plane.speed(), 900.0);
        assert_eq!(plane.length(), 70.0);
        assert_eq!(plane.model_name(), "A320");
    }

    #[test]
    fn rendering_is_stable_per_instance() {
        let plane = test_plane();
        assert_eq!(plane.render(), plane.render());
        let vehicle = Vehicle::new(120.0, 4.2, "Scout");
        assert_eq!(vehicle.render(), vehicle.render());
    }

    #[test]
    fn vehicles_render_polymorphically() {
        let fleet: Vec<Box<dyn RenderableVehicle>> = vec![
            Box::new(Vehicle::new(120.0, 4.2, "Scout")),
            Box::new(test_plane()),
        ];
        let rendered: Vec<String> = fleet.iter().map(|v| v.render()).collect();
        assert_eq!(rendered[0], "Vehicle { 120 4.2 Scout }");
        assert_eq!(rendered[1], "Plane { 1.5 900 70 A320 }");
    }

    #[test]
    fn display_matches_render() {
        let plane = test_plane();
        assert_eq!(plane.to_string(), plane.render());
    }
}
