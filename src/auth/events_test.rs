use super::*;

#[test]
fn emit_reaches_every_subscriber() {
    let bus = AuthBus::new();
    let seen_a = Rc::new(RefCell::new(Vec::new()));
    let seen_b = Rc::new(RefCell::new(Vec::new()));

    {
        let seen = Rc::clone(&seen_a);
        bus.subscribe(move |event| seen.borrow_mut().push(event));
    }
    {
        let seen = Rc::clone(&seen_b);
        bus.subscribe(move |event| seen.borrow_mut().push(event));
    }

    bus.emit(AuthEvent::LoggedIn);
    bus.emit(AuthEvent::Refreshed);

    assert_eq!(*seen_a.borrow(), vec![AuthEvent::LoggedIn, AuthEvent::Refreshed]);
    assert_eq!(*seen_b.borrow(), vec![AuthEvent::LoggedIn, AuthEvent::Refreshed]);
}

#[test]
fn cloned_bus_shares_the_subscriber_list() {
    let bus = AuthBus::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = Rc::clone(&seen);
        bus.subscribe(move |event| seen.borrow_mut().push(event));
    }

    bus.clone().emit(AuthEvent::LoggedOut);
    assert_eq!(*seen.borrow(), vec![AuthEvent::LoggedOut]);
}

#[test]
fn emit_without_subscribers_is_a_no_op() {
    AuthBus::new().emit(AuthEvent::Refreshed);
}
