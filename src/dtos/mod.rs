pub mod businessdtos;
pub mod dashboarddtos;
