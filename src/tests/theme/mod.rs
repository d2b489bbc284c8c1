mod controller;
mod machine;
