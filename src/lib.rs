pub mod modules {
    pub mod hotel {
        pub mod core {
            pub mod guest;
            pub mod ports;
            pub mod projections;
            pub mod reservation;
            pub mod room;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod rest {
                    pub mod error;
                    pub mod guests;
                    pub mod reservations;
                    pub mod rooms;
                }
            }
            pub mod outbound {
                pub mod sqlite;
            }
        }
    }
}

pub mod shell;
