//! Plain data derived from a snapshot for display.

use std::fmt;

use crate::models::Availability;
use crate::store::InventorySnapshot;

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub manufacturer: String,
    pub stock: u32,
    pub description: String,
    pub availability: Availability,
}

/// Header figures shown above the product table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventorySummary {
    pub total_products: usize,
    pub store_count: usize,
    pub out_of_stock: usize,
    pub units_in_stock: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    pub summary: InventorySummary,
    pub rows: Vec<ProductRow>,
    pub search_query: String,
    pub error: Option<String>,
    pub store_error: Option<String>,
}

impl InventoryView {
    pub fn from_snapshot(snapshot: &InventorySnapshot) -> Self {
        let rows: Vec<ProductRow> = snapshot
            .products
            .iter()
            .map(|p| ProductRow {
                id: p.id.clone(),
                name: p.name.clone(),
                manufacturer: p.manufacturer.clone(),
                stock: p.stock,
                description: p.description.clone(),
                availability: p.availability(),
            })
            .collect();

        let summary = InventorySummary {
            total_products: rows.len(),
            store_count: snapshot.stores.len(),
            out_of_stock: rows
                .iter()
                .filter(|r| r.availability == Availability::OutOfStock)
                .count(),
            units_in_stock: rows.iter().map(|r| u64::from(r.stock)).sum(),
        };

        Self {
            summary,
            rows,
            search_query: snapshot.search_query.clone(),
            error: snapshot.last_error.clone(),
            store_error: snapshot.store_error.clone(),
        }
    }
}

impl fmt::Display for InventoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total Products: {}  Stores: {}  Not in Stock: {}  Units: {}",
            self.summary.total_products,
            self.summary.store_count,
            self.summary.out_of_stock,
            self.summary.units_in_stock
        )?;
        if !self.search_query.is_empty() {
            writeln!(f, "Search: {}", self.search_query)?;
        }
        if let Some(error) = &self.error {
            writeln!(f, "Error: {error}")?;
        }
        if let Some(error) = &self.store_error {
            writeln!(f, "Error: {error}")?;
        }
        writeln!(
            f,
            "{:<26} {:<20} {:<16} {:>6}  {:<12}  {}",
            "ID", "Product", "Manufacturer", "Stock", "Availability", "Description"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<26} {:<20} {:<16} {:>6}  {:<12}  {}",
                row.id, row.name, row.manufacturer, row.stock, row.availability, row.description
            )?;
        }
        Ok(())
    }
}
