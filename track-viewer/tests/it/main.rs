mod helper;
mod submit;
