//! End-to-end calendar scenarios.

mod helpers;
mod app_render;
mod month_grid;
mod scroller;
mod selection_flow;
mod weekly_bounds;
mod year_switch;
