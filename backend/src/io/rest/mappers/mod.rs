pub mod reservation_mapper;
