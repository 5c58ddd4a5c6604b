mod client_list;
pub use client_list::ClientList;

mod new_client_form;
pub use new_client_form::NewClientForm;

mod plant_table;
pub use plant_table::PlantTable;

mod maintenance_calendar;
pub use maintenance_calendar::MaintenanceCalendar;
