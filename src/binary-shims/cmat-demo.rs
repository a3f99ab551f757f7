fn main() { ::cmat_tasks::entry_points::demo() }
