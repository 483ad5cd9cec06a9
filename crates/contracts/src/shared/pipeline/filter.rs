use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::a001_sales_order::SalesOrder;
use crate::shared::format::extract_year;
use crate::shared::serde_utils;

/// Выбранные фильтры страницы.
///
/// Пустое множество клиентов или продавцов означает «без ограничения»,
/// а не «ничего не подходит».
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub clients: BTreeSet<String>,
    #[serde(default)]
    pub salesmen: BTreeSet<String>,
    #[serde(default)]
    pub year: Option<String>,
}

impl FilterState {
    /// Page-mount default: only the given year selected.
    pub fn for_year(year: i32) -> Self {
        Self {
            year: Some(format!("{:04}", year)),
            ..Self::default()
        }
    }

    /// Active year filter, `None` when unset or blank.
    pub fn year_filter(&self) -> Option<&str> {
        self.year.as_deref().map(str::trim).filter(|y| !y.is_empty())
    }

    pub fn set_year(&mut self, year: impl Into<String>) {
        let year = year.into();
        self.year = Some(year).filter(|y| !y.trim().is_empty());
    }

    pub fn set_clients<I: IntoIterator<Item = String>>(&mut self, clients: I) {
        self.clients = clients.into_iter().collect();
    }

    pub fn set_salesmen<I: IntoIterator<Item = String>>(&mut self, salesmen: I) {
        self.salesmen = salesmen.into_iter().collect();
    }

    /// Adds the client if absent, removes it otherwise.
    pub fn toggle_client(&mut self, client: &str) {
        toggle(&mut self.clients, client);
    }

    pub fn toggle_salesman(&mut self, salesman: &str) {
        toggle(&mut self.salesmen, salesman);
    }

    /// Number of dimensions that currently restrict the result.
    pub fn active_count(&self) -> usize {
        usize::from(!self.clients.is_empty())
            + usize::from(!self.salesmen.is_empty())
            + usize::from(self.year_filter().is_some())
    }

    pub fn is_unrestricted(&self) -> bool {
        self.active_count() == 0
    }

    /// AND across the year, client and salesman predicates.
    pub fn matches(&self, order: &SalesOrder) -> bool {
        let year_ok = match self.year_filter() {
            Some(year) => extract_year(&order.date_so_approved).as_deref() == Some(year),
            None => true,
        };
        let client_ok = self.clients.is_empty() || self.clients.contains(&order.client);
        let salesman_ok = self.salesmen.is_empty() || self.salesmen.contains(&order.salesman);
        year_ok && client_ok && salesman_ok
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

/// Records matching `filter`, in their original relative order.
pub fn filter_records(records: &[SalesOrder], filter: &FilterState) -> Vec<SalesOrder> {
    records
        .iter()
        .filter(|order| filter.matches(order))
        .cloned()
        .collect()
}

/// Values offered by the filter dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default, deserialize_with = "serde_utils::string_list")]
    pub clients: Vec<String>,
    #[serde(default, deserialize_with = "serde_utils::string_list")]
    pub salesmen: Vec<String>,
    #[serde(default, deserialize_with = "serde_utils::string_list")]
    pub years: Vec<String>,
}

impl FilterOptions {
    /// Distinct clients and salesmen (sorted), years newest first.
    pub fn from_records(records: &[SalesOrder]) -> Self {
        let mut clients = BTreeSet::new();
        let mut salesmen = BTreeSet::new();
        let mut years = BTreeSet::new();
        for order in records {
            if !order.client.is_empty() {
                clients.insert(order.client.clone());
            }
            if !order.salesman.is_empty() {
                salesmen.insert(order.salesman.clone());
            }
            if let Some(year) = order.approved_year() {
                years.insert(year);
            }
        }
        Self {
            clients: clients.into_iter().collect(),
            salesmen: salesmen.into_iter().collect(),
            years: years.into_iter().rev().collect(),
        }
    }

    /// Fills every list the backend left empty from the records themselves.
    pub fn or_derive_from(self, records: &[SalesOrder]) -> Self {
        if !self.clients.is_empty() && !self.salesmen.is_empty() && !self.years.is_empty() {
            return self;
        }
        let derived = Self::from_records(records);
        Self {
            clients: non_empty_or(self.clients, derived.clients),
            salesmen: non_empty_or(self.salesmen, derived.salesmen),
            years: non_empty_or(self.years, derived.years),
        }
    }
}

fn non_empty_or(primary: Vec<String>, fallback: Vec<String>) -> Vec<String> {
    if primary.is_empty() {
        fallback
    } else {
        primary
    }
}
