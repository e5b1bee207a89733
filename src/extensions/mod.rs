pub mod geo_distance_ext;
