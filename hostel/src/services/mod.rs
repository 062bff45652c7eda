pub mod hostel;

pub use hostel::HostelService;
