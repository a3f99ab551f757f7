fn main() { ::cmat_tasks::entry_points::grow() }
