//! Repair/maintenance service price list.
//!
//! A fixed in-code table served to the storefront and used to quote
//! service orders. Order items keep the price submitted with them even
//! when the option exists in the table; the table is advisory.

use models::service_order::OrderItem;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceOption {
    pub name: &'static str,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceSubcategory {
    pub name: &'static str,
    pub options: &'static [ServiceOption],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceCategory {
    pub name: &'static str,
    pub subcategories: &'static [ServiceSubcategory],
}

pub const SERVICES: &[ServiceCategory] = &[
    ServiceCategory {
        name: "Mantenimiento",
        subcategories: &[
            ServiceSubcategory {
                name: "Laptop",
                options: &[
                    ServiceOption { name: "Limpieza general", price: 25.0 },
                    ServiceOption { name: "Cambio de pasta térmica", price: 20.0 },
                    ServiceOption { name: "Limpieza + pasta térmica", price: 40.0 },
                ],
            },
            ServiceSubcategory {
                name: "Computadora de escritorio",
                options: &[
                    ServiceOption { name: "Limpieza general", price: 20.0 },
                    ServiceOption { name: "Cambio de pasta térmica", price: 15.0 },
                ],
            },
            ServiceSubcategory {
                name: "Impresora",
                options: &[
                    ServiceOption { name: "Limpieza de cabezales", price: 15.0 },
                    ServiceOption { name: "Mantenimiento preventivo", price: 25.0 },
                ],
            },
        ],
    },
    ServiceCategory {
        name: "Reparación",
        subcategories: &[
            ServiceSubcategory {
                name: "Laptop",
                options: &[
                    ServiceOption { name: "Cambio de pantalla", price: 120.0 },
                    ServiceOption { name: "Cambio de teclado", price: 45.0 },
                    ServiceOption { name: "Reparación de bisagras", price: 60.0 },
                    ServiceOption { name: "Cambio de batería", price: 55.0 },
                ],
            },
            ServiceSubcategory {
                name: "Computadora de escritorio",
                options: &[
                    ServiceOption { name: "Cambio de fuente de poder", price: 50.0 },
                    ServiceOption { name: "Diagnóstico de placa madre", price: 30.0 },
                ],
            },
        ],
    },
    ServiceCategory {
        name: "Instalación",
        subcategories: &[
            ServiceSubcategory {
                name: "Software",
                options: &[
                    ServiceOption { name: "Sistema operativo", price: 30.0 },
                    ServiceOption { name: "Paquete de oficina", price: 20.0 },
                    ServiceOption { name: "Antivirus", price: 15.0 },
                ],
            },
            ServiceSubcategory {
                name: "Hardware",
                options: &[
                    ServiceOption { name: "Disco SSD", price: 25.0 },
                    ServiceOption { name: "Memoria RAM", price: 15.0 },
                    ServiceOption { name: "Tarjeta de video", price: 35.0 },
                ],
            },
        ],
    },
];

/// Look up an option by (category, subcategory, option) name.
pub fn find_option(category: &str, subcategory: &str, option: &str) -> Option<&'static ServiceOption> {
    SERVICES
        .iter()
        .find(|c| c.name == category)?
        .subcategories
        .iter()
        .find(|s| s.name == subcategory)?
        .options
        .iter()
        .find(|o| o.name == option)
}

/// Sum of the prices as submitted on the order.
pub fn order_total(items: &[OrderItem]) -> f64 {
    items.iter().map(|i| i.price).sum()
}

/// Sum using table prices where the option is known, submitted prices
/// otherwise.
pub fn quote_total(items: &[OrderItem]) -> f64 {
    items
        .iter()
        .map(|i| {
            find_option(&i.category, &i.subcategory, &i.option)
                .map(|o| o.price)
                .unwrap_or(i.price)
        })
        .sum()
}
