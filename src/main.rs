fn main() {
    habit_tracker_lib::run()
}
