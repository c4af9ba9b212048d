mod contains;
mod find_minimum;
