use log::info;
use treap_set::treap::TreapSet;

fn main() {
    env_logger::init();

    let mut set = TreapSet::with_seed([1, 1, 1, 1]);
    for i in (0..100).rev() {
        set.insert(i * 7 % 100);
    }
    info!("inserted {} values", set.len());

    for i in (0..100).filter(|i| i % 3 == 0) {
        set.remove(&i);
    }
    info!("{} values remain after removing multiples of three", set.len());

    println!("{}", set);
}
