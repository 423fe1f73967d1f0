//! Admin order listing over the mock order list.

use crate::message::OrdersMessage;
use std::cmp::Reverse;
use storefront_types::{Money, Order, OrderStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrdersFilter {
    /// `None` shows every status
    pub status: Option<OrderStatus>,
    /// Matched case-insensitively against order number and customer
    pub query: String,
}

impl OrdersFilter {
    pub fn matches(&self, order: &Order) -> bool {
        if self.status.is_some_and(|status| status != order.status) {
            return false;
        }

        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || order.number.to_lowercase().contains(&query)
            || order.customer.to_lowercase().contains(&query)
    }
}

/// Orders passing `filter`, newest first. Orders placed the same day keep
/// their original relative order.
pub fn filter_orders<'a>(orders: &'a [Order], filter: &OrdersFilter) -> Vec<&'a Order> {
    let mut rows: Vec<&Order> = orders.iter().filter(|order| filter.matches(order)).collect();
    rows.sort_by_key(|order| Reverse(order.placed_on));
    rows
}

pub fn total_of(rows: &[&Order]) -> Money {
    rows.iter().map(|order| order.total()).sum()
}

#[derive(Debug)]
pub struct OrdersPage {
    orders: Vec<Order>,
    filter: OrdersFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrdersView<'a> {
    pub filter: &'a OrdersFilter,
    pub rows: Vec<&'a Order>,
    pub total: Money,
}

impl OrdersPage {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders,
            filter: OrdersFilter::default(),
        }
    }

    pub fn filter(&self) -> &OrdersFilter {
        &self.filter
    }

    pub fn update(&mut self, message: OrdersMessage) {
        match message {
            OrdersMessage::FilterStatus(status) => self.filter.status = status,
            OrdersMessage::Search(query) => self.filter.query = query,
        }
    }

    pub fn view(&self) -> OrdersView<'_> {
        let rows = filter_orders(&self.orders, &self.filter);
        OrdersView {
            filter: &self.filter,
            total: total_of(&rows),
            rows,
        }
    }
}
