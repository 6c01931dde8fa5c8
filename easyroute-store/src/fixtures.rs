//! Demo seed data. The service is fixture-backed: these records are loaded
//! once at startup and only trip rosters mutate afterwards.

use chrono::{NaiveDate, NaiveTime};
use easyroute_domain::{
    GeoLocation, PassengerBooking, Route, Trip, TripStatus, User, UserRole, Van, VanStatus,
    Waypoint,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid fixture time")
}

fn waypoint(lat: f64, lng: f64, name: &str) -> Waypoint {
    Waypoint {
        lat,
        lng,
        name: name.to_string(),
    }
}

pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "João Silva".to_string(),
            email: "joao@example.com".to_string(),
            role: UserRole::Passenger,
            phone: "+55 11 98765-4321".to_string(),
            avatar: None,
        },
        User {
            id: "2".to_string(),
            name: "Maria Santos".to_string(),
            email: "maria@example.com".to_string(),
            role: UserRole::Driver,
            phone: "+55 11 91234-5678".to_string(),
            avatar: None,
        },
    ]
}

pub fn seed_vans() -> Vec<Van> {
    vec![
        Van {
            id: "v1".to_string(),
            model: "Mercedes-Benz Sprinter".to_string(),
            plate: "ABC-1234".to_string(),
            capacity: 16,
            driver_id: "2".to_string(),
            driver_name: "Maria Santos".to_string(),
            status: VanStatus::Available,
            current_location: Some(GeoLocation {
                lat: -23.5505,
                lng: -46.6333,
                address: "Av. Paulista, 1000 - São Paulo, SP".to_string(),
            }),
            features: vec![
                "Ar condicionado".to_string(),
                "Wi-Fi".to_string(),
                "USB".to_string(),
                "Acessibilidade".to_string(),
            ],
        },
        Van {
            id: "v2".to_string(),
            model: "Fiat Ducato".to_string(),
            plate: "XYZ-5678".to_string(),
            capacity: 14,
            driver_id: "2".to_string(),
            driver_name: "Maria Santos".to_string(),
            status: VanStatus::InUse,
            current_location: Some(GeoLocation {
                lat: -23.5629,
                lng: -46.6544,
                address: "R. da Consolação, 2000 - São Paulo, SP".to_string(),
            }),
            features: vec!["Ar condicionado".to_string(), "Câmera de ré".to_string()],
        },
        Van {
            id: "v3".to_string(),
            model: "Renault Master".to_string(),
            plate: "DEF-9012".to_string(),
            capacity: 15,
            driver_id: "2".to_string(),
            driver_name: "Maria Santos".to_string(),
            status: VanStatus::Maintenance,
            current_location: None,
            features: vec!["Ar condicionado".to_string(), "Wi-Fi".to_string()],
        },
    ]
}

pub fn seed_routes() -> Vec<Route> {
    vec![
        Route {
            id: "r1".to_string(),
            name: "Centro - Zona Sul".to_string(),
            origin: "Praça da Sé, Centro".to_string(),
            destination: "Shopping Morumbi".to_string(),
            distance: 12.5,
            duration: 35,
            waypoints: vec![
                waypoint(-23.5505, -46.6333, "Praça da Sé"),
                waypoint(-23.5629, -46.6544, "Av. Paulista"),
                waypoint(-23.5955, -46.6989, "Shopping Morumbi"),
            ],
            price: 15.0,
            active: true,
        },
        Route {
            id: "r2".to_string(),
            name: "Aeroporto - Centro".to_string(),
            origin: "Aeroporto de Guarulhos".to_string(),
            destination: "Estação da Luz".to_string(),
            distance: 28.0,
            duration: 50,
            waypoints: vec![
                waypoint(-23.4356, -46.4731, "Aeroporto GRU"),
                waypoint(-23.5261, -46.5253, "Av. Cruzeiro do Sul"),
                waypoint(-23.5345, -46.6356, "Estação da Luz"),
            ],
            price: 35.0,
            active: true,
        },
        Route {
            id: "r3".to_string(),
            name: "Zona Leste - Zona Oeste".to_string(),
            origin: "Itaquera".to_string(),
            destination: "Lapa".to_string(),
            distance: 18.0,
            duration: 45,
            waypoints: vec![
                waypoint(-23.5404, -46.4564, "Itaquera"),
                waypoint(-23.5505, -46.6333, "Centro"),
                waypoint(-23.5282, -46.7012, "Lapa"),
            ],
            price: 20.0,
            active: false,
        },
    ]
}

pub fn seed_trips() -> Vec<Trip> {
    vec![
        Trip {
            id: "t1".to_string(),
            route_id: "r1".to_string(),
            van_id: "v1".to_string(),
            driver_id: "2".to_string(),
            status: TripStatus::Scheduled,
            scheduled_date: date(2025, 10, 16),
            departure_time: time(8, 0),
            arrival_time: None,
            seat_capacity: 16,
            available_seats: 15,
            passengers: vec![PassengerBooking {
                id: "1".to_string(),
                name: "João Silva".to_string(),
                pickup_point: "Praça da Sé".to_string(),
                dropoff_point: "Shopping Morumbi".to_string(),
            }],
            price: 15.0,
        },
        Trip {
            id: "t2".to_string(),
            route_id: "r2".to_string(),
            van_id: "v2".to_string(),
            driver_id: "2".to_string(),
            status: TripStatus::InProgress,
            scheduled_date: date(2025, 10, 15),
            departure_time: time(14, 30),
            arrival_time: None,
            seat_capacity: 14,
            available_seats: 12,
            passengers: vec![
                PassengerBooking {
                    id: "3".to_string(),
                    name: "Pedro Costa".to_string(),
                    pickup_point: "Aeroporto GRU".to_string(),
                    dropoff_point: "Estação da Luz".to_string(),
                },
                PassengerBooking {
                    id: "4".to_string(),
                    name: "Ana Lima".to_string(),
                    pickup_point: "Aeroporto GRU".to_string(),
                    dropoff_point: "Av. Cruzeiro do Sul".to_string(),
                },
            ],
            price: 35.0,
        },
        // Completed departure kept for history views; only one seat was
        // offered on this run.
        Trip {
            id: "t3".to_string(),
            route_id: "r1".to_string(),
            van_id: "v1".to_string(),
            driver_id: "2".to_string(),
            status: TripStatus::Completed,
            scheduled_date: date(2025, 10, 14),
            departure_time: time(9, 0),
            arrival_time: Some(time(9, 40)),
            seat_capacity: 1,
            available_seats: 0,
            passengers: vec![PassengerBooking {
                id: "1".to_string(),
                name: "João Silva".to_string(),
                pickup_point: "Praça da Sé".to_string(),
                dropoff_point: "Av. Paulista".to_string(),
            }],
            price: 15.0,
        },
        Trip {
            id: "t4".to_string(),
            route_id: "r2".to_string(),
            van_id: "v1".to_string(),
            driver_id: "2".to_string(),
            status: TripStatus::Cancelled,
            scheduled_date: date(2025, 10, 13),
            departure_time: time(16, 0),
            arrival_time: None,
            seat_capacity: 16,
            available_seats: 16,
            passengers: Vec::new(),
            price: 35.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_trips_satisfy_seat_invariant() {
        for trip in seed_trips() {
            assert!(
                trip.seat_invariant_holds(),
                "trip {} violates the seat invariant",
                trip.id
            );
        }
    }

    #[test]
    fn test_seed_referential_integrity() {
        let vans = seed_vans();
        let routes = seed_routes();
        let users = seed_users();

        for trip in seed_trips() {
            assert!(vans.iter().any(|v| v.id == trip.van_id));
            assert!(routes.iter().any(|r| r.id == trip.route_id));
            assert!(users.iter().any(|u| u.id == trip.driver_id));

            let route = routes.iter().find(|r| r.id == trip.route_id).unwrap();
            for passenger in &trip.passengers {
                assert!(route.has_waypoint(&passenger.pickup_point));
                assert!(route.has_waypoint(&passenger.dropoff_point));
                assert_ne!(passenger.pickup_point, passenger.dropoff_point);
            }
        }
    }
}
