pub mod synthetic_cell;
