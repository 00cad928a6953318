pub mod m20250801000001_create_attendance;
