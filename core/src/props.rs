/*!
The [`Props`] type.

Props are an ordered collection of key-value pairs. Loggers that understand structured data use them to recover individual values from the state of a log record, instead of only its rendered text.
*/

use core::ops::ControlFlow;

use crate::value::Value;

/**
A collection of key-value pairs.
*/
pub trait Props {
    /**
    Enumerate the key-value pairs in order.

    The `for_each` function can return `ControlFlow::Break` to stop early.
    */
    fn for_each<'kv, F: FnMut(&'kv str, Value<'kv>) -> ControlFlow<()>>(
        &'kv self,
        for_each: F,
    ) -> ControlFlow<()>;

    /**
    Get the first value with the given key.
    */
    fn get<'v>(&'v self, key: &str) -> Option<Value<'v>> {
        let mut value = None;

        let _ = self.for_each(|k, v| {
            if k == key {
                value = Some(v);

                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        value
    }

    fn count(&self) -> usize {
        let mut count = 0;

        let _ = self.for_each(|_, _| {
            count += 1;

            ControlFlow::Continue(())
        });

        count
    }
}

impl<'a, P: Props + ?Sized> Props for &'a P {
    fn for_each<'kv, F: FnMut(&'kv str, Value<'kv>) -> ControlFlow<()>>(
        &'kv self,
        for_each: F,
    ) -> ControlFlow<()> {
        (**self).for_each(for_each)
    }

    fn get<'v>(&'v self, key: &str) -> Option<Value<'v>> {
        (**self).get(key)
    }

    fn count(&self) -> usize {
        (**self).count()
    }
}

impl<K: AsRef<str>, V: crate::value::ToValue> Props for [(K, V)] {
    fn for_each<'kv, F: FnMut(&'kv str, Value<'kv>) -> ControlFlow<()>>(
        &'kv self,
        mut for_each: F,
    ) -> ControlFlow<()> {
        for (k, v) in self {
            for_each(k.as_ref(), v.to_value())?;
        }

        ControlFlow::Continue(())
    }

    fn count(&self) -> usize {
        self.len()
    }
}
