//! Fleet and add-on rate table.
//!
//! A static catalog for the marketing site: each car carries its daily
//! rate, each add-on its per-day rate. Amounts are currency-agnostic;
//! formatting is a presentation concern.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// A rentable car
#[derive(Debug, Clone, Serialize)]
pub struct Car {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub daily_rate: Decimal,
}

/// An optional extra billed per rental day
#[derive(Debug, Clone, Serialize)]
pub struct AddOnRate {
    pub id: String,
    pub label: String,
    pub daily_rate: Decimal,
}

/// The rate table the booking pages and API work against
#[derive(Debug, Clone)]
pub struct Catalog {
    cars: Vec<Car>,
    add_ons: Vec<AddOnRate>,
}

impl Catalog {
    /// The standard Velocity Black fleet and add-on lineup.
    pub fn standard() -> Self {
        let car = |slug: &str, name: &str, category: &str, daily_rate| Car {
            slug: slug.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            daily_rate,
        };
        let add_on = |id: &str, label: &str, daily_rate| AddOnRate {
            id: id.to_string(),
            label: label.to_string(),
            daily_rate,
        };

        Self {
            cars: vec![
                car("city-sprint", "City Sprint", "Compact", dec!(89)),
                car("velvet-cruiser", "Velvet Cruiser", "Sedan", dec!(129)),
                car("dune-raider", "Dune Raider", "SUV", dec!(159)),
                car("apex-gt", "Apex GT", "Supercar", dec!(289)),
            ],
            add_ons: vec![
                add_on("insurance", "Full Insurance", dec!(15)),
                add_on("gps", "GPS Navigation", dec!(10)),
                add_on("childseat", "Child Seat", dec!(5)),
            ],
        }
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn car(&self, slug: &str) -> Option<&Car> {
        self.cars.iter().find(|c| c.slug == slug)
    }

    pub fn add_ons(&self) -> &[AddOnRate] {
        &self.add_ons
    }

    pub fn add_on(&self, id: &str) -> Option<&AddOnRate> {
        self.add_ons.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_lookup() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.car("city-sprint").unwrap().daily_rate, dec!(89));
        assert!(catalog.car("hover-bike").is_none());
    }

    #[test]
    fn test_add_on_lookup() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.add_on("gps").unwrap().daily_rate, dec!(10));
        assert!(catalog.add_on("jetpack").is_none());
    }
}
