pub mod golfcourseapi;
