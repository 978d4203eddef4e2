//! Static datasets: popular locations, vehicle catalog, sample tolls and
//! fuel stops.

use crate::models::{Coordinates, FuelStop, FuelType, Location, Toll, Vehicle};

/// Well-known trip endpoints.
pub fn popular_locations() -> Vec<Location> {
    vec![
        Location::new(
            "del-1",
            "India Gate",
            "New Delhi",
            "Delhi",
            Coordinates::new(28.6129, 77.2295),
        ),
        Location::new(
            "mum-1",
            "Gateway of India",
            "Mumbai",
            "Maharashtra",
            Coordinates::new(19.0728, 72.8826),
        ),
        Location::new(
            "ban-1",
            "Cubbon Park",
            "Bangalore",
            "Karnataka",
            Coordinates::new(12.9716, 77.5946),
        ),
        Location::new(
            "chen-1",
            "Marina Beach",
            "Chennai",
            "Tamil Nadu",
            Coordinates::new(13.0827, 80.2707),
        ),
        Location::new(
            "pune-1",
            "Shaniwar Wada",
            "Pune",
            "Maharashtra",
            Coordinates::new(18.5196, 73.8553),
        ),
    ]
}

/// Vehicles a traveler can pick from.
///
/// Mileage is km/L, except the EV which is km/kWh.
pub fn vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle::new("Maruti Suzuki", "Swift", 2023, 23.20, FuelType::Petrol).with_id("swift-2023"),
        Vehicle::new("Honda", "City", 2023, 17.8, FuelType::Petrol).with_id("city-2023"),
        Vehicle::new("Hyundai", "Verna", 2023, 18.45, FuelType::Petrol).with_id("verna-2023"),
        Vehicle::new("Toyota", "Innova Crysta", 2023, 15.6, FuelType::Diesel)
            .with_id("innova-2023"),
        Vehicle::new("Maruti Suzuki", "Ertiga", 2023, 26.08, FuelType::Cng).with_id("ertiga-2023"),
        Vehicle::new("Tata", "Nexon EV", 2023, 4.5, FuelType::Electric).with_id("nexon-ev"),
    ]
}

/// Toll plazas used by generated routes.
pub fn sample_tolls() -> Vec<Toll> {
    vec![
        Toll {
            id: "toll-1".into(),
            name: "Kherki Daula Toll Plaza".into(),
            location: "NH-8, Gurgaon".into(),
            cost: 65.0,
            coordinates: Coordinates::new(28.4089, 76.9709),
        },
        Toll {
            id: "toll-2".into(),
            name: "Panvel Toll Plaza".into(),
            location: "Mumbai-Pune Expressway".into(),
            cost: 110.0,
            coordinates: Coordinates::new(18.9894, 73.1162),
        },
    ]
}

/// Fuel stops used by generated routes. The second one sells no CNG.
pub fn sample_fuel_stops() -> Vec<FuelStop> {
    vec![
        FuelStop {
            id: "fuel-1".into(),
            name: "Indian Oil Petrol Pump".into(),
            location: "NH-8, Manesar".into(),
            petrol_price: 96.50,
            diesel_price: 89.30,
            cng_price: Some(75.20),
            coordinates: Coordinates::new(28.3670, 76.9301),
            amenities: ["Restroom", "Food Court", "ATM", "Car Wash"]
                .map(String::from)
                .to_vec(),
        },
        FuelStop {
            id: "fuel-2".into(),
            name: "HP Petrol Station".into(),
            location: "Mumbai-Pune Expressway".into(),
            petrol_price: 98.20,
            diesel_price: 91.15,
            cng_price: None,
            coordinates: Coordinates::new(19.0433, 73.0297),
            amenities: ["Restroom", "Snacks", "Tire Air"].map(String::from).to_vec(),
        },
    ]
}

/// Looks up a catalog vehicle by ID.
pub fn find_vehicle(id: &str) -> Option<Vehicle> {
    vehicles().into_iter().find(|v| v.id() == id)
}

/// Looks up a popular location by ID.
pub fn find_location(id: &str) -> Option<Location> {
    popular_locations().into_iter().find(|l| l.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(popular_locations().len(), 5);
        assert_eq!(vehicles().len(), 6);
        assert_eq!(sample_tolls().len(), 2);
        assert_eq!(sample_fuel_stops().len(), 2);
    }

    #[test]
    fn test_catalog_mileage_is_valid() {
        assert!(vehicles().iter().all(|v| v.has_valid_mileage()));
    }

    #[test]
    fn test_catalog_ids_unique() {
        let mut ids: Vec<String> = vehicles().iter().map(|v| v.id().to_string()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_find_vehicle() {
        let ev = find_vehicle("nexon-ev").expect("in catalog");
        assert_eq!(ev.fuel_type(), FuelType::Electric);
        assert_eq!(ev.mileage(), 4.5);
        assert!(find_vehicle("model-t").is_none());
    }

    #[test]
    fn test_find_location() {
        let pune = find_location("pune-1").expect("in catalog");
        assert_eq!(pune.city(), "Pune");
        assert!(find_location("atlantis").is_none());
    }

    #[test]
    fn test_second_stop_has_no_cng() {
        let stops = sample_fuel_stops();
        assert_eq!(stops[0].cng_price, Some(75.20));
        assert_eq!(stops[1].cng_price, None);
        assert!(stops.iter().all(|s| s.has_valid_prices()));
    }
}
