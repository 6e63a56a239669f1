mod common;
mod fpl;
mod medicaid;
mod short_circuits;
