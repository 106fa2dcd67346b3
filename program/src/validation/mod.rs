pub mod system_program_view;
