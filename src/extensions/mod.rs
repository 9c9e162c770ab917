pub mod angle_ext;
